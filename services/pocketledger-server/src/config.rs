//! Server configuration
//!
//! One struct gathers everything the process needs at startup: bind
//! address, database location, and the auth settings (including the
//! signing secret, which lives here and nowhere else).

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use pocketledger_auth::AuthConfig;
use pocketledger_db::DatabaseConfig;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("POCKETLEDGER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("POCKETLEDGER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5000),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
        }
    }

    /// The socket address to bind to
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// Validate the configuration before serving anything
    pub fn validate(&self) -> Result<(), Vec<String>> {
        self.auth.validate()
    }
}
