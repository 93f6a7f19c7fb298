mod add;
mod calendar;
mod clear;
mod done;
mod edit;
mod init;
mod list;
mod name;
mod next;
mod remind;
mod remove;
mod show;
mod summary;
mod utils;

pub use add::{AddParams, handle_add};
pub use calendar::handle_calendar;
pub use clear::handle_clear;
pub use done::handle_done;
pub use edit::{EditParams, handle_edit};
pub use init::handle_init;
pub use list::handle_list;
pub use name::handle_name;
pub use next::handle_next;
pub use remind::handle_remind;
pub use remove::handle_remove;
pub use show::handle_show;
pub use summary::handle_summary;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::model::PlannerState;
use crate::storage::PlannerStore;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PlannerConfig,
    pub store: PlannerStore,
    pub today: NaiveDate,
}

impl CommandContext {
    pub fn new(config: PlannerConfig, store: PlannerStore, today: NaiveDate) -> Self {
        Self {
            config,
            store,
            today,
        }
    }

    /// Resolve config, data file and today's date from the global flags.
    ///
    /// Without a config file the planner is not initialized, unless an
    /// explicit `--data-file` is given, in which case defaults apply.
    pub fn load(
        config_path: Option<&Path>,
        data_file: Option<PathBuf>,
        today: Option<NaiveDate>,
    ) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => PlannerConfig::load_from(path)?,
            None => {
                let cwd = std::env::current_dir()?;
                match PlannerConfig::load(&cwd) {
                    Ok(found) => found,
                    Err(PlannerError::NotInitialized) if data_file.is_some() => {
                        (PlannerConfig::default(), cwd)
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        };

        let store = PlannerStore::new(data_file.unwrap_or_else(|| config.data_path(&root)));
        let clock: Box<dyn Clock> = match today {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock::new(config.zone()?)),
        };

        Ok(Self::new(config, store, clock.today()))
    }

    /// Load the planner state, reporting a recovered corrupt file on stderr.
    pub fn load_state(&self) -> Result<PlannerState> {
        let loaded = self
            .store
            .load()
            .with_context(|| format!("Failed to read {}", self.store.path().display()))?;
        if let Some(warning) = loaded.warning {
            eprintln!("{} {}", "Warning:".yellow().bold(), warning);
        }
        Ok(loaded.state)
    }

    pub fn save_state(&self, state: &PlannerState) -> Result<()> {
        self.store
            .save(state)
            .with_context(|| format!("Failed to save {}", self.store.path().display()))
    }
}
