//! Derived budget-vs-actual types
//!
//! Nothing in this module is ever persisted; insights are recomputed
//! from the stores on demand.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spending health of one budgeted category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    /// Spend is strictly above the limit.
    Overspent,
    /// Spend equals the limit exactly.
    #[serde(rename = "On Budget")]
    OnBudget,
    /// Spend is strictly below the limit.
    #[serde(rename = "Under Budget")]
    UnderBudget,
}

impl BudgetStatus {
    /// Classify a spend against a limit.
    pub fn classify(spent: Decimal, limit: Decimal) -> Self {
        if spent > limit {
            Self::Overspent
        } else if spent == limit {
            Self::OnBudget
        } else {
            Self::UnderBudget
        }
    }
}

/// Budget-vs-actual figures for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInsight {
    pub category: String,
    /// The configured limit.
    pub limit: Decimal,
    /// Actual spend, summed over matching transactions.
    pub spent: Decimal,
    /// Display utilization, capped at 100.0. The uncapped ratio is
    /// recoverable from `spent` and `limit`.
    pub percent_used: f64,
    pub status: BudgetStatus,
    /// Signed `spent - limit`; positive when overspent.
    pub difference: Decimal,
}

/// Whole-ledger totals across every transaction of an owner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `total_income - total_expense`; negative when spending exceeds
    /// earnings.
    pub balance: Decimal,
}
