use crate::core::{EventHandler, EventRecord, IngestionResponse, InvocationContext};
use tracing::Dispatch;

/// Logs every incoming event once at INFO and acknowledges it.
///
/// Built once at start-up and cloned into each invocation. Without an explicit
/// [`Dispatch`] it logs through the process-wide default subscriber.
#[derive(Debug, Clone, Default)]
pub struct IngestionHandler {
    dispatch: Option<Dispatch>,
}

impl IngestionHandler {
    pub fn new() -> Self {
        Self { dispatch: None }
    }

    pub fn with_dispatch(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }

    fn log_event(&self, event: &EventRecord) {
        match &self.dispatch {
            Some(dispatch) => {
                tracing::dispatcher::with_default(dispatch, || {
                    tracing::info!("Event: {}", event);
                });
            }
            None => tracing::info!("Event: {}", event),
        }
    }
}

impl EventHandler for IngestionHandler {
    fn handle(&self, event: EventRecord, _context: &InvocationContext) -> IngestionResponse {
        self.log_event(&event);
        IngestionResponse::success()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_handle_without_subscriber_still_succeeds() {
        let handler = IngestionHandler::new();
        let response = handler.handle(
            EventRecord::new(json!({"Records": []})),
            &InvocationContext::default(),
        );
        assert_eq!(response, IngestionResponse::success());
    }

    #[test]
    fn test_handler_ignores_context() {
        let handler = IngestionHandler::new();
        let event = EventRecord::new(json!({"key": "value"}));

        let plain = handler.handle(event.clone(), &InvocationContext::default());
        let with_id = handler.handle(event, &InvocationContext::with_request_id("req-123"));

        assert_eq!(plain, with_id);
    }
}
