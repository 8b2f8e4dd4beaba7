use s3_file_ingestion::{
    EventHandler, EventRecord, IngestionHandler, IngestionResponse, InvocationContext,
};
use serde_json::json;

mod common;
use common::{capturing_handler, CapturedLogs};

#[test]
fn test_empty_event_logs_and_succeeds() {
    let (handler, logs) = capturing_handler();

    let response = handler.handle(EventRecord::new(json!({})), &InvocationContext::default());

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"message": "Success"})
    );
    let lines = logs.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains("Event: {}"));
}

#[test]
fn test_key_value_event_is_logged_verbatim() {
    let (handler, logs) = capturing_handler();

    let response = handler.handle(
        EventRecord::new(json!({"key": "value"})),
        &InvocationContext::default(),
    );

    assert_eq!(response, IngestionResponse::success());
    let lines = logs.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(r#"Event: {"key":"value"}"#));
}

#[test]
fn test_any_shape_returns_success_with_one_log_line() {
    let inputs = vec![
        json!({"Records": [{"s3": {"bucket": {"name": "master"}, "object": {"key": "docs/a.pdf", "size": 1024}}}]}),
        json!({"a": {"b": {"c": {"d": {"e": [1, 2, {"f": null}]}}}}}),
        json!([1, "two", 3.5]),
        json!("plain string"),
        json!(42),
        json!(true),
        json!(null),
    ];

    for input in inputs {
        let (handler, logs) = capturing_handler();
        let expected = format!("Event: {}", input);

        let response = handler.handle(EventRecord::new(input), &InvocationContext::default());

        assert_eq!(response, IngestionResponse::success());
        let lines = logs.lines();
        assert_eq!(lines.len(), 1, "expected a single log line for {}", expected);
        assert!(lines[0].contains(&expected));
    }
}

#[test]
fn test_repeated_invocations_are_independent() {
    let (handler, logs) = capturing_handler();
    let event = EventRecord::new(json!({"key": "value"}));

    let first = handler.handle(event.clone(), &InvocationContext::with_request_id("req-1"));
    let second = handler.handle(event, &InvocationContext::with_request_id("req-2"));

    assert_eq!(first, second);
    let lines = logs.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.contains(r#"Event: {"key":"value"}"#)));
}

#[test]
fn test_info_filter_off_suppresses_log_but_not_response() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::WARN)
        .finish();
    let handler = IngestionHandler::with_dispatch(tracing::Dispatch::new(subscriber));

    let response = handler.handle(EventRecord::new(json!({})), &InvocationContext::default());

    assert_eq!(response, IngestionResponse::success());
    assert!(logs.lines().is_empty());
}

#[tokio::test]
async fn test_concurrent_invocations_share_one_handler() {
    let (handler, logs) = capturing_handler();

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let handler = handler.clone();
            tokio::spawn(async move {
                handler.handle(
                    EventRecord::new(json!({"sequence": i})),
                    &InvocationContext::default(),
                )
            })
        })
        .collect();

    for task in tasks {
        assert_eq!(task.await.unwrap(), IngestionResponse::success());
    }

    let lines = logs.lines();
    assert_eq!(lines.len(), 8);
    for i in 0..8 {
        let expected = format!(r#"Event: {{"sequence":{}}}"#, i);
        assert_eq!(lines.iter().filter(|line| line.contains(&expected)).count(), 1);
    }
}
