use crate::cli::commands::PriorityArg;
use crate::validation;
use anyhow::Result;
use chrono::{Duration, NaiveDate};
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_due, format_priority, print_json, task_json};

/// Parameters for add operation
pub struct AddParams {
    pub name: String,
    pub priority: PriorityArg,
    pub due: Option<NaiveDate>,
    pub in_days: Option<i64>,
    pub email: Option<String>,
    pub json: bool,
}

pub fn handle_add(ctx: &CommandContext, params: AddParams) -> Result<()> {
    let due = match (params.due, params.in_days) {
        (Some(date), _) => date,
        (None, Some(days)) => Duration::try_days(days)
            .and_then(|offset| ctx.today.checked_add_signed(offset))
            .ok_or_else(|| anyhow::anyhow!("{} days from today is out of range", days))?,
        (None, None) => ctx.today,
    };
    let email = match params.email.as_deref() {
        Some(email) => validation::validate_email(email)?,
        None => None,
    };

    let mut state = ctx.load_state()?;
    let task = state
        .study_list
        .add(&params.name, params.priority.into(), due, email.as_deref())?
        .clone();
    ctx.save_state(&state)?;
    let position = state.study_list.len();
    tracing::info!(id = %task.id, "Added task '{}'", task.name);

    if params.json {
        print_json(&task_json(position, &task, ctx.today))?;
    } else {
        println!(
            "{} {} {} ({}) {}",
            "Added".green(),
            task.id.to_string().cyan(),
            task.name,
            format_priority(task.priority),
            format_due(&task, ctx.today)
        );
    }
    Ok(())
}
