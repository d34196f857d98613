//! Pickup CLI entry point.
//!
//! This binary is the composition root. Responsibilities:
//!
//! 1. **Load configuration** — read an optional `.env` file, then the process
//!    environment ([`config::CliConfig`]).
//! 2. **Wire observability** — install `tracing-subscriber` with a human or
//!    JSON layer and, when configured, an OpenTelemetry OTLP exporter.
//! 3. **Construct infrastructure** — build a [`ReqwestTransport`] and inject it
//!    into an [`ApiClient`].
//! 4. **Dispatch** — parse the command line and print the command's JSON output.

mod commands;
mod config;
mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use pickup_api::{ApiClient, ApiConfig};
use pickup_transport::ReqwestTransport;
use tracing::error;

use crate::commands::{Command, USAGE};
use crate::config::{CliConfig, BASE_URL_VAR};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env();
    let _telemetry = telemetry::init(&config)?;

    let command = Command::parse(std::env::args().skip(1))?;
    if command == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }

    let api_config = ApiConfig::new(config.base_url.as_str())
        .with_context(|| format!("invalid {BASE_URL_VAR}"))?;
    let transport = ReqwestTransport::new().context("failed to build HTTP transport")?;
    let client = ApiClient::new(api_config, Arc::new(transport));

    match commands::execute(command, &client).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "Command failed");
            Err(err)
        }
    }
}
