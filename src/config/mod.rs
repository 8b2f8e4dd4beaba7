pub mod cli;
pub mod lambda;

#[cfg(feature = "cli")]
use crate::config::cli::EventSource;
#[cfg(feature = "cli")]
use crate::domain::model::InvocationContext;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "s3-file-ingestion")]
#[command(about = "Invoke the S3 file ingestion handler locally with a JSON event")]
pub struct CliConfig {
    #[arg(long, help = "Path to the JSON event file, or '-' for stdin")]
    pub event: Option<String>,

    #[arg(long, help = "Request id passed in the invocation context")]
    pub request_id: Option<String>,

    #[arg(long, help = "Pretty-print the response")]
    pub pretty: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn event_source(&self) -> EventSource {
        match self.event.as_deref() {
            None | Some("-") => EventSource::Stdin,
            Some(path) => EventSource::File(path.into()),
        }
    }

    pub fn invocation_context(&self) -> InvocationContext {
        InvocationContext {
            request_id: self.request_id.clone(),
            function_name: Some("s3-file-ingestion".to_string()),
            deadline_ms: None,
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.event {
            validate_path("event", path)?;
        }

        if let Some(request_id) = &self.request_id {
            validate_non_empty_string("request_id", request_id)?;
        }

        tracing::debug!("CLI configuration validation passed");
        Ok(())
    }
}
