use crate::utils::error::{IngestionError, Result};
use crate::utils::validation::{validate_log_filter, Validate};
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl LogFormat {
    fn parse(field: &str, value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "text" => Ok(LogFormat::Text),
            other => Err(IngestionError::InvalidConfigValueError {
                field: field.to_string(),
                value: other.to_string(),
                reason: "Supported formats are 'json' and 'text'".to_string(),
            }),
        }
    }
}

/// Maps a Lambda console log level onto an `EnvFilter` directive.
fn lambda_level_directive(value: &str) -> Result<String> {
    match value.trim().to_ascii_lowercase().as_str() {
        level @ ("trace" | "debug" | "info" | "warn" | "error") => Ok(level.to_string()),
        "fatal" => Ok("error".to_string()),
        other => Err(IngestionError::InvalidConfigValueError {
            field: "AWS_LAMBDA_LOG_LEVEL".to_string(),
            value: other.to_string(),
            reason: "Expected one of TRACE, DEBUG, INFO, WARN, ERROR, FATAL".to_string(),
        }),
    }
}

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub log_filter: String,
    pub log_format: LogFormat,
    pub function_name: Option<String>,
}

impl LambdaConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Function-level logging controls win over the crate's own variables
        let log_format = match (lookup("AWS_LAMBDA_LOG_FORMAT"), lookup("LOG_FORMAT")) {
            (Some(value), _) => LogFormat::parse("AWS_LAMBDA_LOG_FORMAT", &value)?,
            (None, Some(value)) => LogFormat::parse("LOG_FORMAT", &value)?,
            (None, None) => LogFormat::default(),
        };

        let log_filter = match (lookup("AWS_LAMBDA_LOG_LEVEL"), lookup("RUST_LOG")) {
            (Some(level), _) => lambda_level_directive(&level)?,
            (None, Some(directive)) => directive,
            (None, None) => "info".to_string(),
        };

        Ok(Self {
            log_filter,
            log_format,
            function_name: lookup("AWS_LAMBDA_FUNCTION_NAME").filter(|name| !name.is_empty()),
        })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        validate_log_filter("RUST_LOG", &self.log_filter)
    }
}
