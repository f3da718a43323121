//! Ledger repository for JSON storage
//!
//! Owns the two transaction sequences (income and expenses) and mirrors them
//! to a single JSON file. Every mutation rewrites the whole file before
//! returning (write-through), so the in-memory state and the file are always
//! in sync once a mutating call succeeds. A full rewrite per append is O(n)
//! in total record count, an accepted trade-off for personal-use data sizes.

use std::path::{Path, PathBuf};

use crate::error::LedgerResult;
use crate::models::Transaction;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Conventional ledger file name (cwd-relative by default)
pub const DEFAULT_LEDGER_FILE: &str = "transactions.json";

/// The persisted ledger shape: two named, insertion-ordered sequences
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Ledger {
    pub income: Vec<Transaction>,
    pub expenses: Vec<Transaction>,
}

impl Ledger {
    /// Income entries in insertion order
    pub fn income(&self) -> &[Transaction] {
        &self.income
    }

    /// Expense entries in insertion order
    pub fn expenses(&self) -> &[Transaction] {
        &self.expenses
    }

    /// Total number of recorded transactions
    pub fn len(&self) -> usize {
        self.income.len() + self.expenses.len()
    }

    /// Whether the ledger holds no transactions at all
    pub fn is_empty(&self) -> bool {
        self.income.is_empty() && self.expenses.is_empty()
    }
}

/// Repository for ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
    ledger: Ledger,
}

impl LedgerRepository {
    /// Open the ledger at `path`, reading the whole file into memory.
    ///
    /// A missing or unparsable file yields the empty ledger; load failures
    /// are never surfaced to the caller.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let ledger = read_json_or_default(&path);
        Self { path, ledger }
    }

    /// The path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The current in-memory ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Serialize the whole ledger and atomically replace the backing file
    pub fn save(&self) -> LedgerResult<()> {
        write_json_atomic(&self.path, &self.ledger)
    }

    /// Record an income transaction and immediately persist
    pub fn add_income(&mut self, category: impl Into<String>, amount: f64) -> LedgerResult<()> {
        self.ledger.income.push(Transaction::new(category, amount));
        self.save()
    }

    /// Record an expense transaction and immediately persist
    pub fn add_expense(&mut self, category: impl Into<String>, amount: f64) -> LedgerResult<()> {
        self.ledger.expenses.push(Transaction::new(category, amount));
        self.save()
    }
}
