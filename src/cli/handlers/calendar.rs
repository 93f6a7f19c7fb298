use crate::calendar::calendar_events;
use anyhow::Result;

use super::CommandContext;
use super::utils::print_json;

pub fn handle_calendar(ctx: &CommandContext) -> Result<()> {
    let state = ctx.load_state()?;
    print_json(&calendar_events(&state.study_list))
}
