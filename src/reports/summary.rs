//! Budget summary report
//!
//! Stateless derived views over the ledger's current in-memory state:
//! remaining budget and a per-category expense breakdown.

use std::collections::HashMap;

use crate::display::format_amount;
use crate::storage::Ledger;

/// Expense totals for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    /// Category label, exact as recorded (case-sensitive, no normalization)
    pub category: String,
    /// Sum of amounts recorded under this category
    pub total: f64,
    /// Number of transactions in this category
    pub transaction_count: usize,
}

/// Sum of income minus sum of expenses; empty sequences sum to zero
pub fn remaining_budget(ledger: &Ledger) -> f64 {
    let income_total: f64 = ledger.income().iter().map(|t| t.amount).sum();
    let expenses_total: f64 = ledger.expenses().iter().map(|t| t.amount).sum();
    income_total - expenses_total
}

/// Group expenses by exact category string.
///
/// Iteration order is the order of each category's first occurrence in the
/// expense sequence, not sorted. Duplicate or typo'd category names create
/// distinct buckets.
pub fn spending_by_category(ledger: &Ledger) -> Vec<CategorySpending> {
    let mut breakdown: Vec<CategorySpending> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for txn in ledger.expenses() {
        match index.get(txn.category.as_str()) {
            Some(&i) => {
                breakdown[i].total += txn.amount;
                breakdown[i].transaction_count += 1;
            }
            None => {
                index.insert(txn.category.as_str(), breakdown.len());
                breakdown.push(CategorySpending {
                    category: txn.category.clone(),
                    total: txn.amount,
                    transaction_count: 1,
                });
            }
        }
    }

    breakdown
}

/// Budget summary: remaining budget plus the expense breakdown
#[derive(Debug, Clone)]
pub struct BudgetSummary {
    /// Remaining budget (income total minus expense total)
    pub remaining_budget: f64,
    /// Per-category expense totals, first-occurrence order
    pub expenses_by_category: Vec<CategorySpending>,
}

impl BudgetSummary {
    /// Compute the summary from the ledger's current state
    pub fn generate(ledger: &Ledger) -> Self {
        Self {
            remaining_budget: remaining_budget(ledger),
            expenses_by_category: spending_by_category(ledger),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str("Budget Summary:\n");
        output.push_str(&format!(
            "Remaining Budget: {}\n",
            format_amount(self.remaining_budget)
        ));

        if self.expenses_by_category.is_empty() {
            output.push_str("\nNo expenses recorded yet.\n");
        } else {
            output.push_str("\nExpense Analysis:\n");
            for entry in &self.expenses_by_category {
                output.push_str(&format!(
                    "{}: {}\n",
                    entry.category,
                    format_amount(entry.total)
                ));
            }
        }

        output
    }
}
