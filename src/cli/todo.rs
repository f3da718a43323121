//! To-do list menu loop

use crate::display::format_task_list;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::TaskRepository;

use super::{parse_due_date, parse_index, parse_priority, prompt, prompt_required};

/// Run the interactive to-do list menu until the user exits
pub fn run(repo: &mut TaskRepository) -> LedgerResult<()> {
    loop {
        println!();
        println!("1. Add Task");
        println!("2. Remove Task");
        println!("3. Mark Task as Completed");
        println!("4. Display Tasks");
        println!("5. Exit");

        let Some(choice) = prompt("Enter your choice (1-5): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let description = prompt_required("Enter task description: ")?;
                let priority =
                    parse_priority(&prompt_required("Enter task priority (high/medium/low): ")?)?;
                let due_date = parse_due_date(&prompt_required(
                    "Enter due date (YYYY-MM-DD), press Enter if none: ",
                )?)?;
                repo.add(description, priority, due_date)?;
                println!("Task added successfully.");
            }
            "2" => {
                let index = parse_index(&prompt_required("Enter the task index to remove: ")?)?;
                match mutate_at(repo, index, |repo, i| repo.remove(i).map(|_| ())) {
                    Ok(()) => println!("Task removed successfully."),
                    Err(err) if err.is_not_found() => println!("{}", err),
                    Err(err) => return Err(err),
                }
            }
            "3" => {
                let index = parse_index(&prompt_required(
                    "Enter the task index to mark as completed: ",
                )?)?;
                match mutate_at(repo, index, |repo, i| repo.complete(i)) {
                    Ok(()) => println!("Task marked as completed."),
                    Err(err) if err.is_not_found() => println!("{}", err),
                    Err(err) => return Err(err),
                }
            }
            "4" => {
                println!();
                print!("{}", format_task_list(repo.tasks()));
            }
            "5" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 5."),
        }
    }

    Ok(())
}

/// Apply a mutation at a 1-based user-entered index.
///
/// Index 0 has no 0-based counterpart and reports as not found, like any
/// other out-of-range index.
fn mutate_at<F>(repo: &mut TaskRepository, index: usize, op: F) -> LedgerResult<()>
where
    F: FnOnce(&mut TaskRepository, usize) -> LedgerResult<()>,
{
    match index.checked_sub(1) {
        Some(i) => op(repo, i),
        None => Err(LedgerError::NotFound {
            entity_type: "Task",
            identifier: index.to_string(),
        }),
    }
}
