//! Terminal formatting helpers
//!
//! Small utilities for rendering amounts and task lists. All user-facing
//! text goes through plain stdout.

use crate::models::Task;

/// Format a signed amount with a dollar sign and two decimal places
///
/// Negative amounts render as `-$x.yy` rather than `$-x.yy`.
pub fn format_amount(amount: f64) -> String {
    if amount < 0.0 {
        format!("-${:.2}", -amount)
    } else {
        format!("${:.2}", amount)
    }
}

/// Format a single task as a numbered list row (1-based index)
pub fn format_task_row(index: usize, task: &Task) -> String {
    let due = match task.due_date {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => "none".to_string(),
    };

    format!(
        "{}. {} - Priority: {} - Due Date: {} - Status: {}",
        index + 1,
        task.description,
        task.priority,
        due,
        task.status()
    )
}

/// Format the full task list for display
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let mut output = String::from("Task List:\n");
    for (i, task) in tasks.iter().enumerate() {
        output.push_str(&format_task_row(i, task));
        output.push('\n');
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::NaiveDate;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(10.5), "$10.50");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(-10.5), "-$10.50");
        assert_eq!(format_amount(0.05), "$0.05");
    }

    #[test]
    fn test_format_task_row() {
        let due = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
        let task = Task::new("pay rent", Priority::High, Some(due));
        assert_eq!(
            format_task_row(0, &task),
            "1. pay rent - Priority: high - Due Date: 2025-02-01 - Status: Pending"
        );
    }

    #[test]
    fn test_format_task_row_no_due_date() {
        let mut task = Task::new("someday", Priority::Low, None);
        task.complete();
        assert_eq!(
            format_task_row(2, &task),
            "3. someday - Priority: low - Due Date: none - Status: Completed"
        );
    }

    #[test]
    fn test_format_task_list_empty() {
        assert_eq!(format_task_list(&[]), "No tasks found.\n");
    }

    #[test]
    fn test_format_task_list() {
        let tasks = vec![
            Task::new("first", Priority::Medium, None),
            Task::new("second", Priority::High, None),
        ];
        let text = format_task_list(&tasks);
        assert!(text.starts_with("Task List:\n"));
        assert!(text.contains("1. first"));
        assert!(text.contains("2. second"));
    }
}
