//! Budget types
//!
//! A budget is a single mapping from category name to spending limit,
//! at most one per account. The key set is open: any category string a
//! transaction can carry can also carry a limit.

use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Per-category spending limits.
///
/// A `BTreeMap` keeps category iteration in a deterministic order,
/// which downstream aggregation relies on for stable tie-breaking.
pub type CategoryLimits = BTreeMap<String, Decimal>;

/// Wire shape for the budget resource: `{ "categoryLimits": { ... } }`.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetEnvelope {
    #[serde(default)]
    pub category_limits: CategoryLimits,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn envelope_defaults_to_empty_mapping() {
        let envelope: BudgetEnvelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.category_limits.is_empty());
    }

    #[test]
    fn limits_iterate_in_category_order() {
        let mut limits = CategoryLimits::new();
        limits.insert("Transport".to_string(), dec!(100));
        limits.insert("Food".to_string(), dec!(200));
        limits.insert("Rent".to_string(), dec!(600));

        let order: Vec<&str> = limits.keys().map(String::as_str).collect();
        assert_eq!(order, ["Food", "Rent", "Transport"]);
    }
}
