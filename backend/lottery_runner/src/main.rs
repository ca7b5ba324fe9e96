//! Ticket lottery runner: entry point.
//!
//! Deploys the ticket logic and factory in a local Soroban sandbox, creates one
//! lottery instance and drives a complete round through it, logging each
//! step. Configuration comes from the environment (see [`config::Config`]).

mod config;
mod errors;
mod runner;

use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging (RUST_LOG controls verbosity).
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Load optional .env file (ignored if missing).
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    info!(?config, "starting lottery run");

    let summary = runner::run(&config).await?;
    info!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
