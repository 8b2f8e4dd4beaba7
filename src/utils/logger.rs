use crate::config::lambda::{LambdaConfig, LogFormat};
use crate::utils::error::Result;
use tracing::Dispatch;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Installs `dispatch` as the process default and hands it back so the
/// handler can hold it explicitly.
fn install(dispatch: Dispatch) -> Result<Dispatch> {
    tracing::dispatcher::set_global_default(dispatch.clone())?;
    Ok(dispatch)
}

pub fn init_cli_logger(verbose: bool) -> Result<Dispatch> {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("s3_file_ingestion=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // stdout carries the response; logs go to stderr
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .compact(),
    );

    install(Dispatch::new(subscriber))
}

pub fn lambda_dispatch(config: &LambdaConfig) -> Dispatch {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => Dispatch::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(), // CloudWatch picks up one JSON object per line
            ),
        ),
        LogFormat::Text => Dispatch::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .without_time()
                    .compact(),
            ),
        ),
    }
}

pub fn init_lambda_logger(config: &LambdaConfig) -> Result<Dispatch> {
    install(lambda_dispatch(config))
}
