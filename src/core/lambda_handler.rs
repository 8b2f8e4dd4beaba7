use crate::core::{EventHandler, EventRecord, IngestionResponse, InvocationContext};
use crate::core::ingestion::IngestionHandler;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

/// Adapts a Lambda invocation (payload plus runtime context) to the handler port.
pub async fn function_handler(
    handler: IngestionHandler,
    function_name: Option<String>,
    event: LambdaEvent<Value>,
) -> Result<IngestionResponse, Error> {
    let (payload, context) = event.into_parts();

    let invocation_context = InvocationContext {
        request_id: Some(context.request_id),
        function_name,
        deadline_ms: Some(context.deadline),
    };

    Ok(handler.handle(EventRecord::new(payload), &invocation_context))
}
