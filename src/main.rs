use clap::Parser;
use s3_file_ingestion::utils::{logger, validation::Validate};
use s3_file_ingestion::{CliConfig, EventHandler, IngestionError, IngestionHandler};

fn exit_code(error: &IngestionError) -> i32 {
    if error.is_config_error() {
        1
    } else {
        2
    }
}

fn fail(error: IngestionError) -> ! {
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 {}", error.recovery_suggestion());
    std::process::exit(exit_code(&error));
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    let dispatch = logger::init_cli_logger(config.verbose)?;

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(e);
    }

    let event = match config.event_source().read_event() {
        Ok(event) => event,
        Err(e) => fail(e),
    };

    let handler = IngestionHandler::with_dispatch(dispatch);
    let response = handler.handle(event, &config.invocation_context());

    let output = if config.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}
