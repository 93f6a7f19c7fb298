use crate::selection;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_due, format_priority, print_json, task_json};

pub fn handle_next(ctx: &CommandContext, json: bool) -> Result<()> {
    let state = ctx.load_state()?;
    let next = selection::next_task(&state.study_list);

    if json {
        let value = match next {
            Some(task) => {
                let position = state.study_list.position_of(task.id).unwrap_or_default();
                task_json(position, task, ctx.today)
            }
            None => serde_json::Value::Null,
        };
        return print_json(&value);
    }

    match next {
        Some(task) => {
            println!("You should study: {}", task.name.bold());
            println!("  Priority: {}", format_priority(task.priority));
            println!("  {}", format_due(task, ctx.today));
        }
        None => println!("{}", "You have studied everything!".green()),
    }
    Ok(())
}
