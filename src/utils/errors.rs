use thiserror::Error;

/// Errors raised by the dashboard core
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Address error: {0}")]
    Address(#[from] url::ParseError),
    #[error("Chart error: {0}")]
    Chart(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Unknown command: '{0}'. Type `help` for the command list")]
    UnknownCommand(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Shorthand for an unrecognized enum value
    pub fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        DashboardError::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

/// Turn an error into the one-line message shown under the page
///
/// Storage details stay in the log; the user only learns that the
/// preference could not be saved. File errors from host commands are shown as is.
pub fn user_message(error: &DashboardError) -> String {
    match error {
        DashboardError::Storage(_) => {
            "⚠️ Preference storage is unavailable, continuing with session defaults".to_string()
        }
        DashboardError::UnknownCommand(_) | DashboardError::InvalidValue { .. } => {
            format!("❌ {}", error)
        }
        other => format!("❌ {}", other),
    }
}
