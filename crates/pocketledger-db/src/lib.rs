//! Pocketledger Database Layer
//!
//! Persistence for accounts, transactions and budgets backed by a
//! single embedded SQLite database.
//!
//! # Repository Pattern
//!
//! Each domain has its own repository. Every read and write on
//! owner-scoped data takes the owner id as a mandatory parameter and
//! filters inside the SQL; a caller can never observe or touch another
//! owner's rows through this layer, whatever identity checks happened
//! upstream.

pub mod config;
pub mod error;
pub mod models;
pub mod repos;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::info;

pub use config::DatabaseConfig;
pub use error::{DbError, DbResult};
pub use repos::{AccountRepo, BudgetRepo, TransactionRepo};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS accounts (
    id            TEXT PRIMARY KEY,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    created_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    id          TEXT PRIMARY KEY,
    owner_id    TEXT NOT NULL REFERENCES accounts(id),
    kind        TEXT NOT NULL CHECK (kind IN ('income', 'expense')),
    category    TEXT NOT NULL,
    amount      TEXT NOT NULL,
    description TEXT NOT NULL,
    date        TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transactions_owner_date
    ON transactions (owner_id, date DESC);

CREATE TABLE IF NOT EXISTS budgets (
    owner_id        TEXT PRIMARY KEY REFERENCES accounts(id),
    category_limits TEXT NOT NULL,
    updated_at      TEXT NOT NULL
);
"#;

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to SQLite and ensure the schema exists.
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        info!("Connecting to SQLite: {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DbError::Connection(format!("SQLite URL: {e}")))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection(format!("SQLite: {e}")))?;

        let db = Self { pool };
        db.init_schema().await?;

        info!("Connected to SQLite");
        Ok(db)
    }

    async fn init_schema(&self) -> DbResult<()> {
        for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| DbError::Schema(e.to_string()))?;
        }
        Ok(())
    }

    /// Liveness probe for the health endpoint.
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create repository instances
    pub fn accounts(&self) -> AccountRepo {
        AccountRepo::new(self.pool.clone())
    }

    pub fn transactions(&self) -> TransactionRepo {
        TransactionRepo::new(self.pool.clone())
    }

    pub fn budgets(&self) -> BudgetRepo {
        BudgetRepo::new(self.pool.clone())
    }
}
