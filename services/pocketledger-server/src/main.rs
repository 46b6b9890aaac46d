//! Pocketledger Server - personal ledger and budget API
//!
//! # Quick Start
//!
//! ```bash
//! # Start with defaults (0.0.0.0:5000, sqlite://pocketledger.db)
//! JWT_SECRET=$(openssl rand -hex 32) pocketledger-server
//!
//! # Custom port and database
//! pocketledger-server --port 8080 --host 127.0.0.1
//! DATABASE_URL=sqlite:///var/lib/pocketledger.db pocketledger-server
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pocketledger_server::ServerConfig;

/// Pocketledger - authenticated personal ledger and budget API
#[derive(Parser, Debug)]
#[command(
    name = "pocketledger-server",
    about = "Track income, expenses and per-category budgets behind token auth",
    version
)]
struct Args {
    /// Host to bind to
    #[arg(long, env = "POCKETLEDGER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "POCKETLEDGER_PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut config = ServerConfig::from_env();
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    let app = pocketledger_server::build(&config).await?;

    let addr = config.socket_addr()?;
    tracing::info!("Pocketledger server running at http://{addr}");
    tracing::info!("Health:       GET  http://{addr}/health");
    tracing::info!("Signup:       POST http://{addr}/auth/signup");
    tracing::info!("Transactions: GET  http://{addr}/transactions");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
