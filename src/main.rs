//! Command-line entry point.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use gridlift::config::{Config, DEFAULT_CONFIG_PATH};
use gridlift::remote::{HttpTransport, SheetsClient, auth};
use gridlift::transfer::{self, TransferReport};
use gridlift::{Result, source};

#[derive(Debug, Parser)]
#[command(name = "gridlift", version, about = "Copy a local workbook into a Google spreadsheet, sheet by sheet")]
struct Cli {
    /// Path to the JSON config file (source, destination, credentials)
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(report) if report.all_succeeded() => ExitCode::SUCCESS,
        // Per-sheet failures were already reported; flag them in the exit code
        Ok(_) => ExitCode::FAILURE,
        Err(error) => {
            error!("{error}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<TransferReport> {
    let config = Config::load(&cli.config)?;

    info!("loading local workbook...");
    let sheets = source::load_sheets(&config.source)?;

    info!("connecting to the destination spreadsheet...");
    let token = auth::load_access_token(&config.credentials)?;
    let transport = HttpTransport::new(
        &config.destination,
        token,
        Duration::from_secs(config.request_timeout_secs),
    )?;
    let client = Arc::new(SheetsClient::open(transport).await?);
    info!(
        "destination already holds {} sheets",
        client.sheet_count().await
    );

    info!("copying {} sheets into the destination...", sheets.len());
    let report = transfer::transfer_workbook(sheets, client).await;

    info!(
        "copying finished in {:.2?} ({} copied, {} failed)",
        report.elapsed,
        report.succeeded(),
        report.failed()
    );
    Ok(report)
}
