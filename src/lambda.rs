#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use s3_file_ingestion::core::lambda_handler::function_handler;
#[cfg(feature = "lambda")]
use s3_file_ingestion::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use s3_file_ingestion::{IngestionHandler, LambdaConfig};
#[cfg(feature = "lambda")]
use serde_json::Value;

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let dispatch = logger::init_lambda_logger(&config)?;

    if let Some(name) = &config.function_name {
        tracing::info!(function_name = %name, "Starting ingestion Lambda function");
    }

    // Built once; every invocation gets a clone
    let handler = IngestionHandler::with_dispatch(dispatch);
    let function_name = config.function_name.clone();

    run(service_fn(move |event: LambdaEvent<Value>| {
        function_handler(handler.clone(), function_name.clone(), event)
    }))
    .await
}
