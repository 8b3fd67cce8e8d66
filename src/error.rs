use thiserror::Error;

/// Reminder error types
#[derive(Error, Debug)]
pub enum ReminderError {
    #[error("reminder with ID {0} not found")]
    NotFound(u32),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to parse reminders: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to calculate next due date: {0}")]
    Schedule(String),

    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for reminder operations
pub type Result<T> = std::result::Result<T, ReminderError>;
