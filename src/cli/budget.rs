//! Budget tracker menu loop

use crate::error::LedgerResult;
use crate::reports::BudgetSummary;
use crate::storage::LedgerRepository;

use super::{parse_amount, prompt, prompt_required};

/// Run the interactive budget tracker menu until the user exits
pub fn run(repo: &mut LedgerRepository) -> LedgerResult<()> {
    loop {
        println!();
        println!("1. Add Income");
        println!("2. Add Expense");
        println!("3. Display Summary");
        println!("4. Exit");

        let Some(choice) = prompt("Enter your choice (1-4): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let category = prompt_required("Enter income category: ")?;
                let amount = parse_amount(&prompt_required("Enter income amount: ")?)?;
                repo.add_income(category, amount)?;
                println!("Income recorded successfully.");
            }
            "2" => {
                let category = prompt_required("Enter expense category: ")?;
                let amount = parse_amount(&prompt_required("Enter expense amount: ")?)?;
                repo.add_expense(category, amount)?;
                println!("Expense recorded successfully.");
            }
            "3" => {
                let summary = BudgetSummary::generate(repo.ledger());
                println!();
                print!("{}", summary.format_terminal());
            }
            "4" => {
                println!("Exiting...");
                break;
            }
            _ => println!("Invalid choice. Please enter a number between 1 and 4."),
        }
    }

    Ok(())
}
