//! Pocketledger Aggregation Layer
//!
//! Pure budget-vs-actual computation: given a budget's category limits
//! and a slice of transactions, derive per-category spend, utilization,
//! a spending-health classification and the single worst overspend.
//!
//! Nothing here touches a store or has a failure mode; the same inputs
//! always produce the same output. Limit validation happens where
//! budgets are written, not here.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use pocketledger_types::{
    BudgetStatus, CategoryInsight, CategoryLimits, LedgerSummary, Transaction,
};

/// Actual spend per category: the sum of `amount` over every
/// transaction with an exactly matching category string.
///
/// Kind is deliberately not filtered: every matching transaction
/// counts against the budget, and callers that want expenses only can
/// pre-filter the slice.
pub fn actual_spending(transactions: &[Transaction]) -> BTreeMap<String, Decimal> {
    let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
    for tx in transactions {
        *totals.entry(tx.category.clone()).or_insert(Decimal::ZERO) += tx.amount;
    }
    totals
}

/// One insight per budgeted category, in the mapping's iteration order
/// (sorted by category name).
///
/// Utilization is 0 when the limit is 0, otherwise
/// `min(spent / limit, 1) × 100` for display; the signed difference
/// `spent - limit` is preserved uncapped for classification.
pub fn evaluate(limits: &CategoryLimits, transactions: &[Transaction]) -> Vec<CategoryInsight> {
    let spending = actual_spending(transactions);

    limits
        .iter()
        .map(|(category, &limit)| {
            let spent = spending.get(category).copied().unwrap_or(Decimal::ZERO);
            CategoryInsight {
                category: category.clone(),
                limit,
                spent,
                percent_used: percent_used(spent, limit),
                status: BudgetStatus::classify(spent, limit),
                difference: spent - limit,
            }
        })
        .collect()
}

/// The insight with the greatest positive difference among overspent
/// entries; `None` when nothing is overspent. Ties keep the first
/// entry in input order.
pub fn largest_overspend(insights: &[CategoryInsight]) -> Option<&CategoryInsight> {
    insights
        .iter()
        .filter(|i| i.difference > Decimal::ZERO)
        .fold(None, |worst: Option<&CategoryInsight>, candidate| {
            match worst {
                Some(current) if candidate.difference <= current.difference => Some(current),
                _ => Some(candidate),
            }
        })
}

/// Whole-ledger totals: income, expense and their net balance.
pub fn summarize(transactions: &[Transaction]) -> LedgerSummary {
    let mut summary = LedgerSummary::default();
    for tx in transactions {
        if tx.kind.is_expense() {
            summary.total_expense += tx.amount;
        } else {
            summary.total_income += tx.amount;
        }
    }
    summary.balance = summary.total_income - summary.total_expense;
    summary
}

/// Full report for one owner: the per-category insights, the worst
/// overspend, and the ledger totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingReport {
    pub insights: Vec<CategoryInsight>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub largest_overspend: Option<CategoryInsight>,
    pub summary: LedgerSummary,
}

/// Assemble the report callers serve from `GET /insights`.
pub fn report(limits: &CategoryLimits, transactions: &[Transaction]) -> SpendingReport {
    let insights = evaluate(limits, transactions);
    let largest = largest_overspend(&insights).cloned();
    SpendingReport {
        insights,
        largest_overspend: largest,
        summary: summarize(transactions),
    }
}

fn percent_used(spent: Decimal, limit: Decimal) -> f64 {
    if limit.is_zero() {
        return 0.0;
    }
    let ratio = (spent / limit).min(Decimal::ONE);
    (ratio * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0)
}
