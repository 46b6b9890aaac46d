//! Budget repository
//!
//! One budget row per owner. Writes replace the whole mapping; a
//! category omitted from the new mapping loses its limit. Reads of an
//! absent budget return an empty mapping without creating a row.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use uuid::Uuid;

use pocketledger_types::CategoryLimits;

use crate::error::{DbError, DbResult};

/// Budget store: per-owner category limit mappings.
#[derive(Clone)]
pub struct BudgetRepo {
    pool: SqlitePool,
}

impl BudgetRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The owner's stored mapping, or an empty one if none exists yet.
    pub async fn get(&self, owner_id: Uuid) -> DbResult<CategoryLimits> {
        let encoded = sqlx::query_scalar::<_, String>(
            r#"
            SELECT category_limits
            FROM budgets
            WHERE owner_id = ?1
            "#,
        )
        .bind(owner_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        match encoded {
            Some(encoded) => Ok(serde_json::from_str(&encoded)?),
            None => Ok(CategoryLimits::new()),
        }
    }

    /// Upsert the owner's mapping, replacing it entirely. Negative
    /// limits are rejected rather than coerced.
    pub async fn set(&self, owner_id: Uuid, limits: CategoryLimits) -> DbResult<CategoryLimits> {
        for (category, limit) in &limits {
            if *limit < Decimal::ZERO {
                return Err(DbError::InvalidInput(format!(
                    "limit for {category} must not be negative"
                )));
            }
        }

        let encoded = serde_json::to_string(&limits)?;

        sqlx::query(
            r#"
            INSERT INTO budgets (owner_id, category_limits, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT (owner_id) DO UPDATE
            SET category_limits = excluded.category_limits,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(owner_id.to_string())
        .bind(&encoded)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(limits)
    }
}
