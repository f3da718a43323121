//! Task repository for JSON storage
//!
//! Mirrors the flat task list to a single JSON file with the same
//! write-through policy as the ledger: every mutation rewrites the whole
//! file before returning.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Priority, Task};

use super::file_io::{read_json_or_default, write_json_atomic};

/// Conventional task file name (cwd-relative by default)
pub const DEFAULT_TASK_FILE: &str = "tasks.json";

/// Repository for task persistence
pub struct TaskRepository {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskRepository {
    /// Open the task list at `path`; missing or unparsable files yield an
    /// empty list, never an error.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let tasks = read_json_or_default(&path);
        Self { path, tasks }
    }

    /// The path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Serialize the whole task list and atomically replace the backing file
    pub fn save(&self) -> LedgerResult<()> {
        write_json_atomic(&self.path, &self.tasks)
    }

    /// Append a new pending task and immediately persist
    pub fn add(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<NaiveDate>,
    ) -> LedgerResult<()> {
        self.tasks.push(Task::new(description, priority, due_date));
        self.save()
    }

    /// Remove the task at `index` and immediately persist
    pub fn remove(&mut self, index: usize) -> LedgerResult<Task> {
        if index >= self.tasks.len() {
            return Err(LedgerError::task_not_found(index));
        }
        let task = self.tasks.remove(index);
        self.save()?;
        Ok(task)
    }

    /// Mark the task at `index` as completed and immediately persist
    pub fn complete(&mut self, index: usize) -> LedgerResult<()> {
        let task = self
            .tasks
            .get_mut(index)
            .ok_or_else(|| LedgerError::task_not_found(index))?;
        task.complete();
        self.save()
    }
}
