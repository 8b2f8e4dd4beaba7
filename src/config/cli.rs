use crate::domain::model::EventRecord;
use crate::utils::error::Result;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where the CLI takes its event payload from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSource {
    File(PathBuf),
    Stdin,
}

impl EventSource {
    pub fn read_event(&self) -> Result<EventRecord> {
        match self {
            EventSource::File(path) => {
                let data = fs::read(path)?;
                parse_event(&data)
            }
            EventSource::Stdin => {
                let mut data = Vec::new();
                std::io::stdin().lock().read_to_end(&mut data)?;
                parse_event(&data)
            }
        }
    }
}

pub fn parse_event(data: &[u8]) -> Result<EventRecord> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    Ok(EventRecord::new(value))
}
