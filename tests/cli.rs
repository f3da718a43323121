//! End-to-end tests driving the binary through scripted menu sessions

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketledger").unwrap();
    cmd.arg("budget")
        .arg("--file")
        .arg(dir.path().join("transactions.json"));
    cmd
}

fn todo_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pocketledger").unwrap();
    cmd.arg("todo")
        .arg("--file")
        .arg(dir.path().join("tasks.json"));
    cmd
}

#[test]
fn budget_menu_exits() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Add Income"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn budget_exits_on_eof() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir).write_stdin("").assert().success();
}

#[test]
fn budget_invalid_choice_redisplays_menu() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .write_stdin("9\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid choice. Please enter a number between 1 and 4.",
        ));
}

#[test]
fn budget_records_and_summarizes() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .write_stdin("1\nsalary\n1000\n2\nfood\n350.50\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income recorded successfully."))
        .stdout(predicate::str::contains("Expense recorded successfully."))
        .stdout(predicate::str::contains("Remaining Budget: $649.50"))
        .stdout(predicate::str::contains("food: $350.50"));

    // Write-through: the file holds both records after the session
    let raw = std::fs::read_to_string(dir.path().join("transactions.json")).unwrap();
    let ledger: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(ledger["income"][0]["category"], "salary");
    assert_eq!(ledger["expenses"][0]["amount"], 350.50);
}

#[test]
fn budget_state_survives_sessions() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .write_stdin("1\nsalary\n200\n4\n")
        .assert()
        .success();

    budget_cmd(&dir)
        .write_stdin("3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Budget: $200.00"));
}

#[test]
fn budget_recovers_from_corrupt_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("transactions.json"), "not json").unwrap();

    budget_cmd(&dir)
        .write_stdin("3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining Budget: $0.00"))
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn budget_malformed_amount_is_fatal() {
    let dir = TempDir::new().unwrap();

    budget_cmd(&dir)
        .write_stdin("1\nsalary\nten dollars\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn todo_full_session() {
    let dir = TempDir::new().unwrap();

    todo_cmd(&dir)
        .write_stdin("1\npay rent\nhigh\n2025-02-01\n1\nwater plants\n\n\n4\n3\n1\n2\n2\n4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully."))
        .stdout(predicate::str::contains(
            "1. pay rent - Priority: high - Due Date: 2025-02-01 - Status: Pending",
        ))
        .stdout(predicate::str::contains("Task marked as completed."))
        .stdout(predicate::str::contains("Task removed successfully."))
        .stdout(predicate::str::contains(
            "1. pay rent - Priority: high - Due Date: 2025-02-01 - Status: Completed",
        ));
}

#[test]
fn todo_invalid_index_is_reported_not_fatal() {
    let dir = TempDir::new().unwrap();

    todo_cmd(&dir)
        .write_stdin("2\n7\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task not found: 7"));
}

#[test]
fn todo_empty_list_display() {
    let dir = TempDir::new().unwrap();

    todo_cmd(&dir)
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found."));
}
