//! Password service
//!
//! Argon2id hashing and verification. The raw password exists only
//! inside this module's call frames; everything downstream sees the
//! PHC-format hash string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2, Params, Version,
};

use crate::config::PasswordConfig;
use crate::error::{AuthError, AuthResult};

/// Password service for hashing and verification
#[derive(Clone)]
pub struct PasswordService {
    config: PasswordConfig,
}

impl PasswordService {
    /// Create a new password service
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    /// Hash a password using Argon2id
    pub fn hash(&self, password: &str) -> AuthResult<String> {
        self.validate_policy(password)?;

        let salt = SaltString::generate(&mut OsRng);

        let params = Params::new(
            self.config.memory_cost,
            self.config.time_cost,
            self.config.parallelism,
            Some(self.config.hash_length as usize),
        )
        .map_err(|e| AuthError::Config(format!("Invalid Argon2 params: {e}")))?;

        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params);

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| AuthError::PasswordHashingFailed)?;

        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash
    pub fn verify(&self, password: &str, hash: &str) -> AuthResult<bool> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHashingFailed)?;

        let argon2 = Argon2::default();
        match argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(_) => Err(AuthError::PasswordHashingFailed),
        }
    }

    /// The only hard requirement is non-empty; length bounds come from
    /// configuration.
    fn validate_policy(&self, password: &str) -> AuthResult<()> {
        if password.is_empty() {
            return Err(AuthError::InvalidPayload(
                "password must not be empty".to_string(),
            ));
        }
        if password.len() < self.config.min_password_length {
            return Err(AuthError::InvalidPayload(format!(
                "password must be at least {} characters",
                self.config.min_password_length
            )));
        }
        if password.len() > self.config.max_password_length {
            return Err(AuthError::InvalidPayload(format!(
                "password must be at most {} characters",
                self.config.max_password_length
            )));
        }
        Ok(())
    }
}
