use crate::model::TaskRef;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_json, task_json};

pub fn handle_done(ctx: &CommandContext, task_ref: TaskRef, json: bool) -> Result<()> {
    let mut state = ctx.load_state()?;
    let position = state.study_list.resolve(task_ref)?;
    let task = state.study_list.mark_complete(position)?.clone();
    ctx.save_state(&state)?;
    tracing::info!(id = %task.id, "Marked '{}' as studied", task.name);

    if json {
        print_json(&task_json(position, &task, ctx.today))?;
    } else {
        println!("{} '{}' as studied!", "Marked".green(), task.name);
    }
    Ok(())
}
