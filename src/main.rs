use anyhow::Result;
use clap::Parser;

use studyplan::cli::handlers::{self, AddParams, CommandContext, EditParams};
use studyplan::cli::{Cli, Commands};
use studyplan::logging;

fn main() -> Result<()> {
    let Cli {
        command,
        config,
        data_file,
        today,
        verbose,
        log_file,
    } = Cli::parse();

    logging::init(verbose, log_file.as_deref());

    let load_context = || CommandContext::load(config.as_deref(), data_file.clone(), today);

    match command {
        Commands::Init { name, timezone } => {
            handlers::handle_init(name, timezone, data_file.clone())
        }
        Commands::Name { name, json } => handlers::handle_name(&load_context()?, name, json),
        Commands::Add {
            name,
            priority,
            due,
            in_days,
            email,
            json,
        } => handlers::handle_add(
            &load_context()?,
            AddParams {
                name,
                priority,
                due,
                in_days,
                email,
                json,
            },
        ),
        Commands::List { sort, json } => handlers::handle_list(&load_context()?, sort, json),
        Commands::Show { task, json } => handlers::handle_show(&load_context()?, task, json),
        Commands::Edit {
            task,
            name,
            priority,
            due,
            email,
            json,
        } => handlers::handle_edit(
            &load_context()?,
            EditParams {
                task,
                name,
                priority,
                due,
                email,
                json,
            },
        ),
        Commands::Remove { task, force, json } => {
            handlers::handle_remove(&load_context()?, task, force, json)
        }
        Commands::Done { task, json } => handlers::handle_done(&load_context()?, task, json),
        Commands::Next { json } => handlers::handle_next(&load_context()?, json),
        Commands::Summary { json } => handlers::handle_summary(&load_context()?, json),
        Commands::Calendar => handlers::handle_calendar(&load_context()?),
        Commands::Clear { force, json } => handlers::handle_clear(&load_context()?, force, json),
        Commands::Remind { dry_run, json } => {
            handlers::handle_remind(&load_context()?, dry_run, json)
        }
    }
}
