use crate::domain::model::{EventRecord, IngestionResponse, InvocationContext};

pub trait EventHandler: Send + Sync {
    fn handle(&self, event: EventRecord, context: &InvocationContext) -> IngestionResponse;
}
