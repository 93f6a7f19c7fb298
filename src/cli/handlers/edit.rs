use crate::cli::commands::PriorityArg;
use crate::model::{FieldEdit, TaskRef};
use crate::validation;
use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;

use super::CommandContext;
use super::utils::{print_json, print_task_line, task_json};

/// Parameters for edit operation
pub struct EditParams {
    pub task: TaskRef,
    pub name: Option<String>,
    pub priority: Option<PriorityArg>,
    pub due: Option<NaiveDate>,
    pub email: Option<String>,
    pub json: bool,
}

pub fn handle_edit(ctx: &CommandContext, params: EditParams) -> Result<()> {
    let mut edits = Vec::new();
    if let Some(name) = params.name {
        edits.push(FieldEdit::Name(name));
    }
    if let Some(priority) = params.priority {
        edits.push(FieldEdit::Priority(priority.into()));
    }
    if let Some(due) = params.due {
        edits.push(FieldEdit::DueDate(due));
    }
    if let Some(email) = params.email {
        edits.push(FieldEdit::Email(validation::validate_email(&email)?));
    }
    if edits.is_empty() {
        anyhow::bail!("Nothing to change. Use --name, --priority, --due or --email.");
    }

    let mut state = ctx.load_state()?;
    let position = state.study_list.resolve(params.task)?;
    // A rejected edit returns before anything is saved
    for edit in edits {
        state.study_list.edit_field(position, edit)?;
    }
    ctx.save_state(&state)?;

    let task = state.study_list.get(position)?;
    tracing::info!(id = %task.id, "Updated task '{}'", task.name);

    if params.json {
        print_json(&task_json(position, task, ctx.today))?;
    } else {
        println!("{}", "Assignment updated!".green());
        print_task_line(position, task, ctx.today);
    }
    Ok(())
}
