//! The `studyplan` command-line interface.

mod commands;
pub mod handlers;

pub use commands::{Cli, Commands, PriorityArg, SortArg};
