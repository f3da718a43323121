//! Storage layer for pocketledger
//!
//! Provides JSON file storage with atomic writes and silent recovery on
//! load: a missing or unparsable file is replaced with the empty default so
//! the tools always start up.

pub mod file_io;
pub mod ledger;
pub mod tasks;

pub use file_io::{read_json_or_default, write_json_atomic};
pub use ledger::{Ledger, LedgerRepository, DEFAULT_LEDGER_FILE};
pub use tasks::{TaskRepository, DEFAULT_TASK_FILE};
