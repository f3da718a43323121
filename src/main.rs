use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pocketledger::cli;
use pocketledger::storage::{
    LedgerRepository, TaskRepository, DEFAULT_LEDGER_FILE, DEFAULT_TASK_FILE,
};

#[derive(Parser)]
#[command(
    name = "pocketledger",
    version,
    about = "Menu-driven personal budget tracker and to-do list manager",
    long_about = "pocketledger bundles two small single-user tools: a budget \
                  tracker that records income and expenses to a local JSON \
                  file, and a to-do list manager that keeps tasks in a second \
                  JSON file. Both are driven by an interactive numbered menu."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Track income and expenses
    Budget {
        /// Path to the ledger file
        #[arg(short, long, env = "POCKETLEDGER_BUDGET_FILE", default_value = DEFAULT_LEDGER_FILE)]
        file: PathBuf,
    },

    /// Manage the to-do list
    Todo {
        /// Path to the task file
        #[arg(short, long, env = "POCKETLEDGER_TASK_FILE", default_value = DEFAULT_TASK_FILE)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Budget { file } => {
            let mut repo = LedgerRepository::open(file);
            cli::budget::run(&mut repo)?;
        }
        Commands::Todo { file } => {
            let mut repo = TaskRepository::open(file);
            cli::todo::run(&mut repo)?;
        }
    }

    Ok(())
}
