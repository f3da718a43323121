//! pocketledger - Menu-driven personal budget tracker and to-do list manager
//!
//! This library provides the core functionality for two small, independent
//! command-line tools that share one binary:
//!
//! - a budget tracker that records income and expense transactions to a
//!   local JSON file and reports remaining budget and per-category spending
//! - a to-do list manager that keeps a flat list of tasks in a second
//!   JSON file
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, tasks)
//! - `storage`: JSON file storage layer with atomic writes
//! - `reports`: Derived views over the ledger (budget summary)
//! - `display`: Terminal formatting helpers
//! - `cli`: Interactive menu loops

pub mod cli;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
