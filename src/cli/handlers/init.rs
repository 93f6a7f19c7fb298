use crate::clock::Zone;
use crate::config::{CONFIG_FILE_NAME, PlannerConfig, PlannerSettings};
use crate::error::PlannerError;
use crate::storage::PlannerStore;
use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

pub fn handle_init(
    name: Option<String>,
    timezone: Option<String>,
    data_file: Option<PathBuf>,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(PlannerError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let timezone = timezone.unwrap_or_else(|| "local".to_string());
    let zone: Zone = timezone.parse()?;

    let data_file = data_file
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| PlannerSettings::default().data_file);

    let config = PlannerConfig {
        planner: PlannerSettings {
            data_file,
            timezone: zone.to_string(),
        },
        email: Default::default(),
    };

    // An existing data file is kept, so a planner can be re-attached to it
    let store = PlannerStore::new(config.data_path(&cwd));
    let loaded = store.load()?;
    if let Some(warning) = loaded.warning {
        anyhow::bail!(
            "Refusing to overwrite unreadable data file {}: {}",
            warning.path.display(),
            warning.reason
        );
    }
    let mut state = loaded.state;
    if let Some(name) = name {
        state.set_user_name(&name)?;
    }
    if let Some(parent) = store.path().parent() {
        std::fs::create_dir_all(parent)?;
    }
    store.save(&state)?;
    config.save(&config_path)?;

    tracing::info!(path = %config_path.display(), "Initialized planner");
    println!("{} study planner in {}", "Initialized".green(), cwd.display());
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", store.path().display());
    if !state.user_name.is_empty() {
        println!("Welcome, {}!", state.user_name.bold());
    }

    Ok(())
}
