//! Task list server binary.
//!
//! Parses [`ServerConfig`] from flags and environment, installs the tracing
//! subscriber and serves the HTTP API until interrupted.

use anyhow::{Context, Result};
use clap::Parser;
use tasklists::server::{ServerConfig, init_telemetry, run};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_telemetry(&config.log_level, config.log_format)
        .context("failed to initialise telemetry")?;
    run(&config).await.context("task list server failed")?;
    Ok(())
}
