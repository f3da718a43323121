//! Transaction model
//!
//! A transaction is one income or expense entry: a creation timestamp, a
//! free-form category label, and a signed amount. Transactions are immutable
//! once created; the ledger only ever appends them.

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// On-disk timestamp format: `"YYYY-MM-DD HH:MM:SS"`.
///
/// The default chrono serde representation uses a `T` separator, so a custom
/// format module keeps the persisted file byte-compatible with the
/// conventional space-separated form.
pub mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// One income or expense entry
///
/// Amounts are plain `f64` to preserve the original file format (JSON
/// numbers) and its arithmetic semantics; no currency unit is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the transaction was recorded (local time)
    #[serde(with = "datetime_format")]
    pub date: NaiveDateTime,

    /// Free-form category label; no registry, exact-match grouping
    pub category: String,

    /// Signed decimal amount
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction stamped with the current local time
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: Local::now().naive_local(),
            category: category.into(),
            amount,
        }
    }

    /// Create a transaction with an explicit timestamp
    pub fn with_date(date: NaiveDateTime, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format(datetime_format::FORMAT),
            self.category,
            crate::display::format_amount(self.amount)
        )
    }
}
