//! Pocketledger Types - Canonical domain types for the personal ledger
//!
//! This crate contains the foundational types shared by every other
//! pocketledger crate, with zero dependencies on its siblings:
//!
//! - Account identity types
//! - Transaction types (income/expense records and their payloads)
//! - Budget types (per-category limit mappings)
//! - Insight types (derived budget-vs-actual figures, never persisted)
//!
//! # Architectural Invariants
//!
//! These types support the core pocketledger isolation invariants:
//!
//! 1. Every transaction is bound to exactly one owner, set at creation
//! 2. An owner id never travels in a client payload; it is resolved
//!    from a verified token and threaded through explicitly
//! 3. Budgets are one-per-owner, replaced whole, never patched per key

pub mod account;
pub mod budget;
pub mod insight;
pub mod transaction;

pub use account::*;
pub use budget::*;
pub use insight::*;
pub use transaction::*;

/// Version of the pocketledger types schema
pub const TYPES_VERSION: &str = "0.1.0";
