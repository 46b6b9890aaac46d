//! Pocketledger REST server
//!
//! Wires configuration, the SQLite store, the auth layer and the
//! route table into one axum application. The binary in `main.rs` is
//! a thin shell over [`build`]; integration tests drive the same
//! router in-process.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use anyhow::Context;
use axum::Router;

use pocketledger_auth::AuthService;
use pocketledger_db::Database;

pub use config::ServerConfig;
pub use state::AppState;

/// Connect the store and assemble the application router.
pub async fn build(config: &ServerConfig) -> anyhow::Result<Router> {
    config
        .validate()
        .map_err(|errors| anyhow::anyhow!("invalid configuration: {}", errors.join("; ")))?;

    let db = Database::connect(&config.database)
        .await
        .context("connecting to the database")?;

    let auth = AuthService::new(db.accounts(), config.auth.clone());

    Ok(routes::router(AppState::new(db, auth)))
}
