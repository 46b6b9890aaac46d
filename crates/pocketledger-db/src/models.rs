//! Database models - rows mapped from SQLite tables
//!
//! SQLite stores ids as hyphenated UUID text and amounts as decimal
//! text (exact round trip, no float drift). Conversion into the domain
//! types happens here, in one place.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use std::str::FromStr as _;
use uuid::Uuid;

use pocketledger_types::{Account, Transaction, TransactionKind};

use crate::error::{DbError, DbResult};

#[derive(Debug, Clone, FromRow)]
pub struct DbAccount {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl DbAccount {
    pub fn into_domain(self) -> DbResult<Account> {
        Ok(Account {
            id: parse_uuid(&self.id)?,
            email: self.email,
            password_hash: self.password_hash,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbTransaction {
    pub id: String,
    pub owner_id: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub description: String,
    pub date: DateTime<Utc>,
}

impl DbTransaction {
    pub fn into_domain(self) -> DbResult<Transaction> {
        Ok(Transaction {
            id: parse_uuid(&self.id)?,
            owner_id: parse_uuid(&self.owner_id)?,
            kind: TransactionKind::from_str(&self.kind)
                .map_err(|e| DbError::Serialization(e.to_string()))?,
            category: self.category,
            amount: parse_amount(&self.amount)?,
            description: self.description,
            date: self.date,
        })
    }
}

fn parse_uuid(s: &str) -> DbResult<Uuid> {
    Uuid::parse_str(s).map_err(|e| DbError::Serialization(format!("bad uuid {s:?}: {e}")))
}

fn parse_amount(s: &str) -> DbResult<Decimal> {
    Decimal::from_str(s).map_err(|e| DbError::Serialization(format!("bad amount {s:?}: {e}")))
}
