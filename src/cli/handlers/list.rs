use crate::cli::commands::SortArg;
use crate::selection;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_json, print_task_line, task_json};

pub fn handle_list(ctx: &CommandContext, sort: SortArg, json: bool) -> Result<()> {
    let state = ctx.load_state()?;
    let sorted = selection::sort_by(&state.study_list, sort.into());

    if json {
        let tasks: Vec<_> = sorted
            .iter()
            .map(|(position, task)| task_json(*position, task, ctx.today))
            .collect();
        return print_json(&tasks);
    }

    if !state.user_name.is_empty() {
        println!("Welcome, {}!", state.user_name.bold());
    }
    if sorted.is_empty() {
        println!("Your study list is empty!");
        return Ok(());
    }
    for (position, task) in sorted {
        print_task_line(position, task, ctx.today);
    }
    Ok(())
}
