use crate::model::TaskRef;
use anyhow::Result;

use super::CommandContext;
use super::utils::{print_json, print_task, task_json};

pub fn handle_show(ctx: &CommandContext, task_ref: TaskRef, json: bool) -> Result<()> {
    let state = ctx.load_state()?;
    let position = state.study_list.resolve(task_ref)?;
    let task = state.study_list.get(position)?;

    if json {
        print_json(&task_json(position, task, ctx.today))?;
    } else {
        print_task(position, task, ctx.today);
    }
    Ok(())
}
