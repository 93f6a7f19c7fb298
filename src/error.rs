use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid task reference: {0}")]
    Index(String),

    #[error("Invalid due date '{value}' on task '{task}'")]
    Parse { task: String, value: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Reminder could not be sent: {0}")]
    Dispatch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Planner not initialized. Run 'studyplan init' first.")]
    NotInitialized,

    #[error("Planner already initialized at {0}")]
    AlreadyInitialized(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
