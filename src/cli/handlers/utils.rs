use crate::due::{DueStatus, classify, days_until_due, describe};
use crate::model::{Priority, Task};
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Ask a yes/no question on stdin. Anything but `y` means no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format priority with color coding
pub fn format_priority(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => "High".red().bold(),
        Priority::Medium => "Medium".yellow(),
        Priority::Low => "Low".dimmed(),
    }
}

/// Due phrase for a task, colored by urgency
pub fn format_due(task: &Task, today: NaiveDate) -> colored::ColoredString {
    match days_until_due(task, today) {
        Ok(days) => {
            let phrase = describe(days);
            match classify(days) {
                DueStatus::Overdue if task.done => phrase.dimmed(),
                DueStatus::Overdue => phrase.red(),
                DueStatus::DueToday => phrase.yellow().bold(),
                DueStatus::Future => phrase.normal(),
            }
        }
        Err(_) => format!("Invalid due date '{}'", task.due_date).red(),
    }
}

fn format_check(task: &Task) -> colored::ColoredString {
    if task.done {
        "[x]".green()
    } else {
        "[ ]".normal()
    }
}

/// One numbered line of a listing
pub fn print_task_line(position: usize, task: &Task, today: NaiveDate) {
    let name = if task.done {
        task.name.dimmed()
    } else {
        task.name.normal()
    };
    println!(
        "{:>3}. {} {} ({}) {} {}",
        position,
        format_check(task),
        name,
        format_priority(task.priority),
        format_due(task, today),
        task.id.to_string().dimmed()
    );
}

/// Print a single task with details
pub fn print_task(position: usize, task: &Task, today: NaiveDate) {
    println!("{} {}", task.id.to_string().cyan().bold(), task.name.bold());
    println!("Position: {}", position);
    println!("Priority: {}", format_priority(task.priority));
    println!("Due:      {} ({})", task.due_date, format_due(task, today));
    println!(
        "Status:   {}",
        if task.done {
            "studied".green()
        } else {
            "to study".normal()
        }
    );
    match &task.user_email {
        Some(email) => println!("Reminder: {} ({})", email, task.reminder_state()),
        None => println!("Reminder: {}", "none".dimmed()),
    }
}

/// JSON view of a task: the stored record plus its position and urgency
pub fn task_json(position: usize, task: &Task, today: NaiveDate) -> serde_json::Value {
    let days = days_until_due(task, today).ok();
    serde_json::json!({
        "position": position,
        "id": task.id,
        "name": task.name,
        "priority": task.priority.to_string(),
        "due_date": task.due_date,
        "days_until_due": days,
        "due_status": days.map(classify),
        "done": task.done,
        "reminded": task.reminded,
        "user_email": task.user_email,
        "reminder": task.reminder_state(),
    })
}

/// Text progress bar such as `[#####-----]`
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
