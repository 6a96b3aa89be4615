//! rest-service-example - HTTP CRUD service for the records table
//!
//! Startup order: `.env` → settings (defaults, config file, environment) →
//! tracing → database pool → HTTP server. Any failure before serving exits
//! non-zero.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use restexample_server::Settings;
use tracing::info;

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "rest-service-example",
    version,
    about = "REST service exposing the records table over HTTP",
    long_about = "Serves GET/POST /records and GET/PUT/DELETE /records/{id} backed by PostgreSQL. \
                  Settings come from defaults, an optional TOML config file and RESTEXAMPLE_* \
                  environment variables (RESTEXAMPLE_LOGLEVEL, RESTEXAMPLE_LISTEN, RESTEXAMPLE_DB_URL)."
)]
struct Cli {
    /// Path to a TOML config file (keys: loglevel, listen, [db] url)
    #[arg(long, short = 'c', env = "RESTEXAMPLE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Before parsing, so RESTEXAMPLE_CONFIG from .env reaches clap.
    // Never overrides variables that are already set.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref()).context("Unable to load config")?;
    let level = settings
        .log_level()
        .with_context(|| format!("Unable to parse loglevel: {}", settings.loglevel))?;

    tracing_setup::init(&tracing_setup::TracingConfig { level })?;

    match &cli.config {
        Some(path) => info!("Parsed config: {}", path.display()),
        None => info!("Config file is not specified."),
    }

    restexample_server::serve(&settings)
        .await
        .context("Server error")?;

    Ok(())
}
