pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::EventSource;
pub use config::lambda::{LambdaConfig, LogFormat};
pub use core::ingestion::IngestionHandler;
pub use domain::model::{EventRecord, IngestionResponse, InvocationContext};
pub use domain::ports::EventHandler;
pub use utils::error::{IngestionError, Result};
