//! Authentication error types
//!
//! Errors are designed to be safe for external exposure (no internal
//! detail leakage) and convertible to the fixed HTTP status contract.

use thiserror::Error;

/// Result type alias for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication error types
#[derive(Debug, Error)]
pub enum AuthError {
    /// Token is invalid (malformed, wrong signature, wrong algorithm)
    #[error("Invalid token")]
    InvalidToken,

    /// Token signature is fine but the embedded expiry has passed
    #[error("Token has expired")]
    TokenExpired,

    /// No usable `Authorization: Bearer <token>` header on the request
    #[error("No token provided")]
    MissingCredentials,

    /// Login email does not match any account
    #[error("No account for that email")]
    UnknownEmail,

    /// Password hash comparison failed
    #[error("Incorrect password")]
    WrongPassword,

    /// Signup email is already registered
    #[error("Email already registered")]
    EmailExists,

    /// Signup input failed validation (empty email, rejected password)
    #[error("Invalid credentials payload: {0}")]
    InvalidPayload(String),

    /// Password hashing failed
    #[error("Password hashing failed")]
    PasswordHashingFailed,

    /// Underlying storage failure
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuthError {
    /// HTTP status for this error under the fixed route contract.
    ///
    /// Duplicate email and unknown login email both map to 400: that
    /// is the ledger API's published behavior, not a mistake.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::EmailExists | Self::UnknownEmail | Self::InvalidPayload(_) => 400,
            Self::InvalidToken
            | Self::TokenExpired
            | Self::MissingCredentials
            | Self::WrongPassword => 401,
            Self::PasswordHashingFailed | Self::Database(_) | Self::Config(_) => 500,
        }
    }

    /// Message safe to show a client. Internal faults collapse to a
    /// generic line; the detail goes to the log instead.
    pub fn client_message(&self) -> String {
        match self {
            Self::PasswordHashingFailed | Self::Database(_) | Self::Config(_) => {
                "An internal error occurred".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn is_server_fault(&self) -> bool {
        self.status_code() >= 500
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match err.kind() {
            ErrorKind::ExpiredSignature => Self::TokenExpired,
            _ => Self::InvalidToken,
        }
    }
}

impl From<pocketledger_db::DbError> for AuthError {
    fn from(err: pocketledger_db::DbError) -> Self {
        use pocketledger_db::DbError;
        match err {
            DbError::Duplicate(_) => Self::EmailExists,
            other => Self::Database(other.to_string()),
        }
    }
}
