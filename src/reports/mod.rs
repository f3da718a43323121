//! Derived views over the ledger
//!
//! Reports are stateless: each is computed on demand from the record store's
//! current snapshot and holds no state of its own.

pub mod summary;

pub use summary::{remaining_budget, spending_by_category, BudgetSummary, CategorySpending};
