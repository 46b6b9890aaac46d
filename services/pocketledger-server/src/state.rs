//! Shared application state

use pocketledger_auth::AuthService;
use pocketledger_db::Database;

/// State threaded through every handler. Both members are cheap
/// clones over shared pools.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(db: Database, auth: AuthService) -> Self {
        Self { db, auth }
    }
}
