use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::print_json;

pub fn handle_name(ctx: &CommandContext, name: String, json: bool) -> Result<()> {
    let mut state = ctx.load_state()?;
    state.set_user_name(&name)?;
    ctx.save_state(&state)?;
    tracing::info!("Updated user name");

    if json {
        print_json(&serde_json::json!({ "user_name": state.user_name }))?;
    } else {
        println!("{} {}!", "Welcome,".green(), state.user_name.bold());
    }
    Ok(())
}
