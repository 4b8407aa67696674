mod cli;
mod error;
mod filters;
mod output;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotelier_core::{collect_catalogue, default_sources, HttpClient, ReqwestHttpClient};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();

    // Filters are validated before any supplier is contacted.
    let hotel_ids = filters::parse_hotel_ids(&cli.hotel_ids)?;
    let destination_ids = filters::parse_destination_ids(&cli.destination_ids)?;

    let client: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::new());
    let sources = default_sources(client, cli.timeout_ms);

    let catalogue = collect_catalogue(&sources).await?;
    let hotels = catalogue.find(&hotel_ids, &destination_ids);

    output::render(&hotels, cli.pretty)?;
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
