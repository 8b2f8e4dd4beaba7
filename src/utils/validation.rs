use crate::utils::error::{IngestionError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(IngestionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(IngestionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IngestionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_log_filter(field_name: &str, directive: &str) -> Result<()> {
    validate_non_empty_string(field_name, directive)?;

    tracing_subscriber::EnvFilter::try_new(directive)
        .map(|_| ())
        .map_err(|e| IngestionError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: directive.to_string(),
            reason: format!("Invalid log filter directive: {}", e),
        })
}
