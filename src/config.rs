use crate::clock::Zone;
use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".studyplan.toml";

/// Environment variable holding the SMTP password. Never read from the
/// config file.
pub const SMTP_PASSWORD_ENV: &str = "STUDYPLAN_SMTP_PASSWORD";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub planner: PlannerSettings,

    #[serde(default)]
    pub email: EmailSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerSettings {
    /// Data file, relative to the directory holding the config file.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_data_file() -> String {
    "tasks.json".to_string()
}

fn default_timezone() -> String {
    "local".to_string()
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            timezone: default_timezone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TlsMode {
    /// Plain connection upgraded with STARTTLS, usually port 587.
    #[default]
    Starttls,
    /// TLS from the first byte, usually port 465.
    Implicit,
    /// No encryption. Only for a relay on localhost.
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp_host: Option<String>,

    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,

    #[serde(default)]
    pub tls: TlsMode,

    /// Sender address, e.g. `Study Planner <planner@example.com>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_smtp_port() -> u16 {
    587
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            smtp_host: None,
            smtp_port: default_smtp_port(),
            tls: TlsMode::default(),
            from: None,
            username: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EmailSettings {
    pub fn is_configured(&self) -> bool {
        self.smtp_host.is_some() && self.from.is_some()
    }
}

impl PlannerConfig {
    /// Find the config file above `start_path` and load it. Returns the
    /// config and the directory it lives in.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<(Self, PathBuf)> {
        if !config_path.exists() {
            return Err(PlannerError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        let content = std::fs::read_to_string(config_path)?;
        let config: PlannerConfig = toml::from_str(&content)?;
        // Reject a bad zone at load time rather than on first use
        config.zone()?;
        let root = config_path
            .parent()
            .ok_or_else(|| {
                PlannerError::Config("Config file has no parent directory".to_string())
            })?
            .to_path_buf();
        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok((config, root))
    }

    pub fn find_config_file(start_path: &Path) -> Result<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Ok(config_path);
            }
            if !current.pop() {
                return Err(PlannerError::NotInitialized);
            }
        }
    }

    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(&self.planner.data_file)
    }

    pub fn zone(&self) -> Result<Zone> {
        self.planner.timezone.parse()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
