//! Account registration and credential verification
//!
//! The auth service sits directly on the account repository: it is the
//! only component that ever sees a raw password, and it stores nothing
//! but the Argon2 hash.

use uuid::Uuid;

use pocketledger_db::AccountRepo;

use crate::config::AuthConfig;
use crate::error::{AuthError, AuthResult};
use crate::jwt::TokenService;
use crate::password::PasswordService;

/// Outcome of a successful registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub account_id: Uuid,
    pub token: String,
}

/// Credential-based identity: register, authenticate, verify.
#[derive(Clone)]
pub struct AuthService {
    accounts: AccountRepo,
    passwords: PasswordService,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(accounts: AccountRepo, config: AuthConfig) -> Self {
        Self {
            accounts,
            passwords: PasswordService::new(config.password),
            tokens: TokenService::new(config.jwt),
        }
    }

    /// Register a new account and issue its first token.
    ///
    /// Fails with [`AuthError::EmailExists`] when the email is taken.
    pub async fn register(&self, email: &str, password: &str) -> AuthResult<Registration> {
        if email.trim().is_empty() {
            return Err(AuthError::InvalidPayload(
                "email must not be empty".to_string(),
            ));
        }

        let password_hash = self.passwords.hash(password)?;
        let account = self.accounts.create(email, &password_hash).await?;

        tracing::info!(account_id = %account.id, "account registered");

        let token = self.tokens.issue(account.id)?;
        Ok(Registration {
            account_id: account.id,
            token,
        })
    }

    /// Verify credentials and issue a fresh token.
    ///
    /// Fails with [`AuthError::UnknownEmail`] when no account matches
    /// and [`AuthError::WrongPassword`] when the hash comparison fails.
    pub async fn authenticate(&self, email: &str, password: &str) -> AuthResult<String> {
        let account = self
            .accounts
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UnknownEmail)?;

        if !self.passwords.verify(password, &account.password_hash)? {
            return Err(AuthError::WrongPassword);
        }

        self.tokens.issue(account.id)
    }

    /// Resolve a token to the account id it binds. Stateless; see
    /// [`TokenService`] for the no-revocation caveat.
    pub fn verify(&self, token: &str) -> AuthResult<Uuid> {
        self.tokens.verify(token)
    }

    /// The verification primitive, for wiring into the request guard.
    pub fn token_service(&self) -> &TokenService {
        &self.tokens
    }
}
