//! Transaction types for the personal ledger
//!
//! A transaction is a single income or expense record bound to exactly
//! one owner. The owner binding is immutable; everything else can be
//! edited by the owner after the fact.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

/// Error returned when parsing a kind string that is neither
/// `income` nor `expense`.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown transaction kind: {0}")]
pub struct UnknownKind(pub String);

/// A persisted transaction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    /// Reference to the owning account. Set by the store from the
    /// caller's verified identity, immutable thereafter.
    pub owner_id: Uuid,
    pub kind: TransactionKind,
    pub category: String,
    /// Strictly positive.
    pub amount: Decimal,
    pub description: String,
    pub date: DateTime<Utc>,
}

/// Payload for creating a transaction. Carries no owner field; the
/// owner always comes from the verified request identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub category: String,
    pub amount: Decimal,
    pub description: String,
    /// Defaults to the creation instant when omitted.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Partial-update payload. `None` leaves the stored field untouched;
/// id and owner are not expressible here and therefore immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPatch {
    #[serde(default)]
    pub kind: Option<TransactionKind>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl TransactionPatch {
    /// True when the patch carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.description.is_none()
            && self.date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn kind_round_trips_through_lowercase_strings() {
        assert_eq!("income".parse::<TransactionKind>().unwrap(), TransactionKind::Income);
        assert_eq!("expense".parse::<TransactionKind>().unwrap(), TransactionKind::Expense);
        assert_eq!(TransactionKind::Expense.to_string(), "expense");
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn kind_serde_uses_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Income).unwrap();
        assert_eq!(json, r#""income""#);
        let kind: TransactionKind = serde_json::from_str(r#""expense""#).unwrap();
        assert_eq!(kind, TransactionKind::Expense);
    }

    #[test]
    fn new_transaction_accepts_numeric_amounts() {
        let payload: NewTransaction = serde_json::from_str(
            r#"{"kind":"expense","category":"Food","amount":42.50,"description":"groceries"}"#,
        )
        .unwrap();
        assert_eq!(payload.amount, dec!(42.50));
        assert!(payload.date.is_none());
    }

    #[test]
    fn empty_patch_is_detected() {
        let patch: TransactionPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let patch: TransactionPatch =
            serde_json::from_str(r#"{"category":"Rent"}"#).unwrap();
        assert!(!patch.is_empty());
    }
}
