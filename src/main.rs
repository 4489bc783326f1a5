use std::path::PathBuf;
use anyhow::Context;
use clap::{Parser, Subcommand};
use env_logger::Env;

use crate::category::Category;
use crate::config::Config;
use crate::parser::Statement;
use crate::store::{CsvStore, RecordStore};

mod category;
mod common;
mod config;
mod controller;
mod editor;
mod parser;
mod render;
mod report;
mod shell;
mod store;
mod transaction;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Expense store file [default: expenses.csv]
    #[clap(short, long)]
    file: Option<PathBuf>,

    /// Config file [default: <config dir>/spendlog/config.toml]
    #[clap(long)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the expense store if it doesn't exist
    Init,
    /// Log an expense
    Add {
        /// Amount spent, e.g. 12.50
        amount: f64,
        /// Category name or menu number
        category: Category,
        /// What the money was spent on
        description: Option<String>,
        /// Date of the expense [default: today]
        #[clap(short, long)]
        date: Option<String>,
    },
    /// List all expenses, or the expenses of one category, with their total
    List {
        /// Category name or menu number
        category: Option<Category>,
    },
    /// Total per category and grand total
    Summary,
    /// Show the numbered category list
    Categories,
    /// Interactive command shell, the default when no command is given
    Shell,
}

impl Commands {
    /// The shell has no statement, every other command runs exactly one
    fn into_statement(self) -> Option<Statement> {
        match self {
            Commands::Init => Some(Statement::Init),
            Commands::Add { amount, category, description, date } => Some(Statement::Add {
                date,
                amount,
                category,
                description: description.unwrap_or_default(),
            }),
            Commands::List { category } => Some(Statement::List(category)),
            Commands::Summary => Some(Statement::Summary),
            Commands::Categories => Some(Statement::Categories),
            Commands::Shell => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    let store = CsvStore::new(config.store_file(cli.file.as_deref()));
    store.initialize()
        .with_context(|| format!("Unable to create expense store {}", store.path().display()))?;

    match cli.command.unwrap_or(Commands::Shell).into_statement() {
        None => shell::run(&store, &config.history_file()),
        Some(statement) => {
            let output = controller::execute(&store, statement)?;
            println!("{output}");
            Ok(())
        }
    }
}
