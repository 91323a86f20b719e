//! plantmap - fetch CRM plants and write the territory map dataset.

use std::io;
use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use plantmap::auth::CredentialError;
use plantmap::config::Config;
use plantmap::{app, report};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    info!("plantmap starting");

    println!("Territory Map Data Fetcher");
    println!("{}", "=".repeat(50));
    println!("Fetching plants, pipeline and contacts...");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config).await {
        Ok(summary) => {
            report::print_summary(&summary.output_path, &summary.enrichment);
            ExitCode::SUCCESS
        }
        Err(e) if e.downcast_ref::<CredentialError>().is_some() => {
            eprintln!("No CRM API key: {}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
