//! Transaction repository
//!
//! Owner scoping invariant: every statement here filters on
//! `owner_id`, so a row belonging to another account is
//! indistinguishable from a row that does not exist.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use uuid::Uuid;

use pocketledger_types::{NewTransaction, Transaction, TransactionPatch};

use crate::error::{DbError, DbResult};
use crate::models::DbTransaction;

/// Ledger store: per-owner income/expense records.
#[derive(Clone)]
pub struct TransactionRepo {
    pool: SqlitePool,
}

impl TransactionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a transaction owned by `owner_id`. The owner always
    /// comes from the caller's verified identity; the payload cannot
    /// carry one. `date` defaults to now.
    pub async fn create(&self, owner_id: Uuid, new: NewTransaction) -> DbResult<Transaction> {
        validate_amount(new.amount)?;
        validate_text("category", &new.category)?;
        validate_text("description", &new.description)?;

        let tx = Transaction {
            id: Uuid::new_v4(),
            owner_id,
            kind: new.kind,
            category: new.category,
            amount: new.amount,
            description: new.description,
            date: new.date.unwrap_or_else(Utc::now),
        };

        sqlx::query(
            r#"
            INSERT INTO transactions (id, owner_id, kind, category, amount, description, date)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(tx.id.to_string())
        .bind(tx.owner_id.to_string())
        .bind(tx.kind.as_str())
        .bind(&tx.category)
        .bind(tx.amount.to_string())
        .bind(&tx.description)
        .bind(tx.date)
        .execute(&self.pool)
        .await?;

        Ok(tx)
    }

    /// All transactions owned by `owner_id`, most recent date first.
    /// Equal dates keep insertion order (rowid is monotone).
    pub async fn list(&self, owner_id: Uuid) -> DbResult<Vec<Transaction>> {
        let rows = sqlx::query_as::<_, DbTransaction>(
            r#"
            SELECT id, owner_id, kind, category, amount, description, date
            FROM transactions
            WHERE owner_id = ?1
            ORDER BY date DESC, rowid ASC
            "#,
        )
        .bind(owner_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DbTransaction::into_domain).collect()
    }

    /// Apply a partial update to the owner's transaction. Patched
    /// fields are validated exactly as on create; id and owner are
    /// immutable.
    pub async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        patch: TransactionPatch,
    ) -> DbResult<Transaction> {
        let mut tx = self.fetch_owned(owner_id, id).await?;

        if let Some(kind) = patch.kind {
            tx.kind = kind;
        }
        if let Some(category) = patch.category {
            validate_text("category", &category)?;
            tx.category = category;
        }
        if let Some(amount) = patch.amount {
            validate_amount(amount)?;
            tx.amount = amount;
        }
        if let Some(description) = patch.description {
            validate_text("description", &description)?;
            tx.description = description;
        }
        if let Some(date) = patch.date {
            tx.date = date;
        }

        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET kind = ?3, category = ?4, amount = ?5, description = ?6, date = ?7
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .bind(tx.kind.as_str())
        .bind(&tx.category)
        .bind(tx.amount.to_string())
        .bind(&tx.description)
        .bind(tx.date)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            // Deleted between read and write; same answer as never-existed.
            return Err(not_found(id));
        }

        Ok(tx)
    }

    /// Delete the owner's transaction.
    pub async fn delete(&self, owner_id: Uuid, id: Uuid) -> DbResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn fetch_owned(&self, owner_id: Uuid, id: Uuid) -> DbResult<Transaction> {
        let row = sqlx::query_as::<_, DbTransaction>(
            r#"
            SELECT id, owner_id, kind, category, amount, description, date
            FROM transactions
            WHERE id = ?1 AND owner_id = ?2
            "#,
        )
        .bind(id.to_string())
        .bind(owner_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.into_domain(),
            None => Err(not_found(id)),
        }
    }
}

fn not_found(id: Uuid) -> DbError {
    DbError::NotFound(format!("transaction {id}"))
}

fn validate_amount(amount: Decimal) -> DbResult<()> {
    if amount <= Decimal::ZERO {
        return Err(DbError::InvalidInput(
            "amount must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn validate_text(field: &str, value: &str) -> DbResult<()> {
    if value.trim().is_empty() {
        return Err(DbError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}
