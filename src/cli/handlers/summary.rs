use crate::summary::{progress_fraction, summary};
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_json, progress_bar};

pub fn handle_summary(ctx: &CommandContext, json: bool) -> Result<()> {
    let state = ctx.load_state()?;
    let counts = summary(&state.study_list, ctx.today);
    let progress = progress_fraction(&state.study_list);

    if json {
        return print_json(&serde_json::json!({
            "summary": counts,
            "progress": progress,
        }));
    }

    println!("{}", "Study Plan Summary".bold());
    println!("Total assignments: {}", counts.total);
    println!("Completed:         {}", counts.completed.to_string().green());
    println!("Incomplete:        {}", counts.incomplete);
    println!("Due today:         {}", counts.due_today.to_string().yellow());
    println!("Overdue:           {}", counts.overdue.to_string().red());
    if counts.invalid_dates > 0 {
        println!("Invalid dates:     {}", counts.invalid_dates.to_string().red());
    }
    println!();

    if counts.total == 0 {
        println!("You haven't added any assignments yet!");
    } else {
        println!(
            "You've completed {} out of {} assignments ({:.0}%).",
            counts.completed,
            counts.total,
            progress * 100.0
        );
        println!("{}", progress_bar(progress, 30));
    }
    Ok(())
}
