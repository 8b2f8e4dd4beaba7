use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Logger initialization failed: {0}")]
    LoggerError(#[from] tracing::dispatcher::SetGlobalDefaultError),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl IngestionError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            IngestionError::IoError(e) => format!("Could not read the event: {}", e),
            IngestionError::SerializationError(e) => {
                format!("The event is not valid JSON: {}", e)
            }
            IngestionError::LoggerError(e) => format!("Could not set up logging: {}", e),
            IngestionError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            IngestionError::IoError(_) => "Check that the event file exists and is readable",
            IngestionError::SerializationError(_) => "Pass a well-formed JSON document as the event",
            IngestionError::LoggerError(_) => "Install the logger only once per process",
            IngestionError::InvalidConfigValueError { .. } => {
                "Review the command line arguments and environment variables"
            }
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, IngestionError::InvalidConfigValueError { .. })
    }
}

pub type Result<T> = std::result::Result<T, IngestionError>;
