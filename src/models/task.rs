//! Task model
//!
//! Represents to-do list entries with a priority and an optional due date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(PriorityParseError(other.to_string())),
        }
    }
}

/// Error type for priority parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityParseError(String);

impl fmt::Display for PriorityParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid priority (expected high/medium/low): {}", self.0)
    }
}

impl std::error::Error for PriorityParseError {}

/// A to-do list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// What needs to be done
    pub description: String,

    /// Task priority, defaults to medium
    #[serde(default)]
    pub priority: Priority,

    /// Optional due date (date only, no time component)
    pub due_date: Option<NaiveDate>,

    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a new pending task
    pub fn new(description: impl Into<String>, priority: Priority, due_date: Option<NaiveDate>) -> Self {
        Self {
            description: description.into(),
            priority,
            due_date,
            completed: false,
        }
    }

    /// Mark the task as completed
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Status label for display
    pub fn status(&self) -> &'static str {
        if self.completed {
            "Completed"
        } else {
            "Pending"
        }
    }
}
