//! restexample-server: HTTP CRUD service over a single `records` table
//!
//! Each request acquires one pooled PostgreSQL connection, runs exactly one
//! parameterized statement and answers with JSON.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;

use std::sync::Arc;

pub use config::{ConfigError, LogLevel, Settings};
pub use db::{DbError, MemoryStore, RecordRepo, RecordStore};
pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState, ServerConfig};

/// Connect to the database and serve HTTP until shutdown.
///
/// An unreachable database or an unbindable listen address is returned as an
/// error before any request is served.
pub async fn serve(settings: &Settings) -> Result<()> {
    tracing::info!("Using DB URL: {}", config::redact_url(&settings.db.url));
    let pool = db::create_pool(&settings.db.url).await?;
    tracing::info!("Connected!");

    let store = Arc::new(RecordRepo::new(pool.clone()));
    let result = run_server(store, ServerConfig::from(settings)).await;

    pool.close().await;
    Ok(result?)
}
