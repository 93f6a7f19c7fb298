use crate::model::TaskRef;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{confirm, print_json};

pub fn handle_remove(
    ctx: &CommandContext,
    task_ref: TaskRef,
    force: bool,
    json: bool,
) -> Result<()> {
    let mut state = ctx.load_state()?;
    let position = state.study_list.resolve(task_ref)?;

    if !force && !json {
        let name = &state.study_list.get(position)?.name;
        if !confirm(&format!("Remove '{}'?", name.cyan()))? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = state.study_list.remove_at(position)?;
    ctx.save_state(&state)?;
    tracing::info!(id = %removed.id, "Removed task '{}'", removed.name);

    if json {
        print_json(&serde_json::json!({
            "action": "removed",
            "id": removed.id,
            "name": removed.name,
        }))?;
    } else {
        println!("{} {}", "Removed assignment:".red(), removed.name);
    }
    Ok(())
}
