//! Core data models for pocketledger
//!
//! This module contains the data structures the two tools persist:
//! transactions for the budget tracker and tasks for the to-do list.

pub mod task;
pub mod transaction;

pub use task::{Priority, Task};
pub use transaction::Transaction;
