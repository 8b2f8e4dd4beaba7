pub mod ingestion;
#[cfg(feature = "lambda")]
pub mod lambda_handler;

pub use crate::domain::model::{EventRecord, IngestionResponse, InvocationContext};
pub use crate::domain::ports::EventHandler;
