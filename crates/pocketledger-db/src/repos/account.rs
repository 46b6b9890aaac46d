//! Account repository

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use pocketledger_types::Account;

use crate::error::{DbError, DbResult};
use crate::models::DbAccount;

/// Credential store: one row per account, unique email.
#[derive(Clone)]
pub struct AccountRepo {
    pool: SqlitePool,
}

impl AccountRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new account. The caller supplies the password already
    /// hashed; the raw value never reaches this layer.
    pub async fn create(&self, email: &str, password_hash: &str) -> DbResult<Account> {
        let account = Account {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };

        sqlx::query(
            r#"
            INSERT INTO accounts (id, email, password_hash, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(account.id.to_string())
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                return DbError::Duplicate(format!("email {email} already registered"));
            }
            DbError::Query(e)
        })?;

        Ok(account)
    }

    /// Find account by email, exact case-sensitive match.
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<Account>> {
        let row = sqlx::query_as::<_, DbAccount>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM accounts
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(DbAccount::into_domain).transpose()
    }

    /// Find account by id.
    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<Account>> {
        let row = sqlx::query_as::<_, DbAccount>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM accounts
            WHERE id = ?1
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DbAccount::into_domain).transpose()
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(
        e.as_database_error().map(|d| d.kind()),
        Some(sqlx::error::ErrorKind::UniqueViolation)
    )
}
