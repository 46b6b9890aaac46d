//! Account identity types
//!
//! An account is the partitioning key for all ledger and budget data.
//! The password hash never leaves the persistence/auth layers; the
//! serialized form of [`Account`] deliberately omits it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account.
///
/// Immutable after signup except for the password hash. Accounts are
/// never deleted by the core.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Uuid,
    /// Unique, case-sensitive as stored.
    pub email: String,
    /// One-way Argon2 hash. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// The identity resolved from a verified token, attached to requests by
/// the guard layer. Downstream stores take this as their mandatory
/// owner parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Owner(pub Uuid);

impl Owner {
    pub fn id(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for Owner {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_not_serialized() {
        let account = Account {
            id: Uuid::new_v4(),
            email: "a@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("passwordHash"));
        assert!(json.contains("a@example.com"));
    }
}
