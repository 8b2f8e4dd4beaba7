use serde::{Deserialize, Serialize};
use std::fmt;

pub const SUCCESS_MESSAGE: &str = "Success";

/// Opaque payload handed over by the invoking runtime. Any JSON shape is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRecord(pub serde_json::Value);

impl EventRecord {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Second invocation argument. Carried through for parity with the runtime call
/// convention; nothing reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvocationContext {
    pub request_id: Option<String>,
    pub function_name: Option<String>,
    pub deadline_ms: Option<u64>,
}

impl InvocationContext {
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: Some(request_id.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionResponse {
    pub message: String,
}

impl IngestionResponse {
    pub fn success() -> Self {
        Self {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}
