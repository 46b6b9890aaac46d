//! Pocketledger Authentication Layer
//!
//! Credential-based identity for the personal ledger:
//!
//! - **Password Security**: Argon2id hashing, raw passwords never stored
//! - **JWT Identity**: signed tokens binding an account id, 24 h window
//! - **Request Guard**: the single request-boundary token check for axum
//!
//! # Authentication Flow
//!
//! ```text
//! Request ── GuardLayer ──> Owner in extensions ──> handler
//!                │
//!                ▼
//!          TokenService::verify   (stateless; no revocation list;
//!                                  logout is a client-side discard)
//! ```

pub mod config;
pub mod error;
pub mod guard;
pub mod jwt;
pub mod password;
pub mod service;

pub use config::{AuthConfig, JwtConfig, PasswordConfig};
pub use error::{AuthError, AuthResult};
pub use guard::{CurrentOwner, Guard, GuardLayer};
pub use jwt::TokenService;
pub use password::PasswordService;
pub use service::{AuthService, Registration};
