use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{confirm, print_json};

pub fn handle_clear(ctx: &CommandContext, force: bool, json: bool) -> Result<()> {
    let mut state = ctx.load_state()?;

    if !force && !json && !state.study_list.is_empty() {
        let prompt = format!("Remove all {} assignments?", state.study_list.len());
        if !confirm(&prompt)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = state.study_list.clear_all();
    ctx.save_state(&state)?;
    tracing::info!(removed, "Cleared study list");

    if json {
        print_json(&serde_json::json!({ "action": "cleared", "removed": removed }))?;
    } else {
        println!("{} ({} removed)", "All assignments cleared!".green(), removed);
    }
    Ok(())
}
