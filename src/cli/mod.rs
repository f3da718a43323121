//! Interactive menu loops
//!
//! Each tool presents a numbered menu on stdout and reads choices line by
//! line from stdin. Invalid menu choices print an error and redisplay the
//! menu; malformed numeric input propagates as an error and terminates the
//! process. EOF on stdin exits the loop cleanly.

pub mod budget;
pub mod todo;

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Priority;

/// Print a prompt and read one line from stdin.
///
/// Returns `None` on EOF so menu loops can terminate when input runs out.
pub(crate) fn prompt(text: &str) -> LedgerResult<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

/// Like [`prompt`], but EOF mid-entry is an input error
pub(crate) fn prompt_required(text: &str) -> LedgerResult<String> {
    prompt(text)?.ok_or_else(|| LedgerError::Input("unexpected end of input".into()))
}

/// Parse a signed decimal amount
pub(crate) fn parse_amount(raw: &str) -> LedgerResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| LedgerError::Input(format!("Invalid amount: {}", raw)))
}

/// Parse a 1-based task index as entered by the user
pub(crate) fn parse_index(raw: &str) -> LedgerResult<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| LedgerError::Input(format!("Invalid task index: {}", raw)))
}

/// Parse an optional due date; empty input means no due date
pub(crate) fn parse_due_date(raw: &str) -> LedgerResult<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| LedgerError::Input(format!("Invalid due date (expected YYYY-MM-DD): {}", raw)))
}

/// Parse a priority; empty input falls back to the default (medium)
pub(crate) fn parse_priority(raw: &str) -> LedgerResult<Priority> {
    if raw.trim().is_empty() {
        return Ok(Priority::default());
    }

    raw.parse()
        .map_err(|e: crate::models::task::PriorityParseError| LedgerError::Input(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("10.50").unwrap(), 10.50);
        assert_eq!(parse_amount(" -3 ").unwrap(), -3.0);
        assert!(parse_amount("ten").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("3").unwrap(), 3);
        assert!(parse_index("-1").is_err());
        assert!(parse_index("abc").is_err());
    }

    #[test]
    fn test_parse_due_date() {
        assert_eq!(parse_due_date("").unwrap(), None);
        assert_eq!(
            parse_due_date("2025-02-01").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 1)
        );
        assert!(parse_due_date("02/01/2025").is_err());
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("").unwrap(), Priority::Medium);
        assert_eq!(parse_priority("high").unwrap(), Priority::High);
        assert!(parse_priority("urgent").is_err());
    }
}
