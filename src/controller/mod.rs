use anyhow::Context;
use log::info;
use crate::category::Category;
use crate::parser::{Statement, USAGE};
use crate::render::{render_category_listing, render_listing, render_summary};
use crate::report;
use crate::store::RecordStore;
use crate::transaction::{resolve_date, Transaction, validate_amount};

/// Run a statement against the store, returning the text to print
pub(crate) fn execute(store: &dyn RecordStore, statement: Statement) -> anyhow::Result<String> {
    match statement {
        Statement::Init => {
            store.initialize().context("Unable to create expense store")?;
            Ok("Expense store is ready".to_string())
        },
        Statement::Add { date, amount, category, description } => {
            execute_add(store, date.as_deref(), amount, category, &description)
        },
        Statement::List(None) => {
            let transactions = store.read_all().context("Unable to read expenses")?;
            Ok(render_listing(&report::list_all(&transactions)))
        },
        Statement::List(Some(category)) => {
            let transactions = store.read_all().context("Unable to read expenses")?;
            Ok(render_category_listing(&report::list_by_category(&transactions, category), category))
        },
        Statement::Summary => {
            let transactions = store.read_all().context("Unable to read expenses")?;
            Ok(render_summary(&report::summarize(&transactions)))
        },
        Statement::Categories => Ok(Category::menu()),
        Statement::Help => Ok(USAGE.to_string()),
        Statement::Exit => Ok(String::new()),
    }
}

fn execute_add(store: &dyn RecordStore, date: Option<&str>, amount: f64, category: Category, description: &str) -> anyhow::Result<String> {
    let amount = validate_amount(amount)?;
    let transaction = Transaction::new(&resolve_date(date), amount, category, description);
    store.append(&transaction).context("Unable to save expense")?;

    info!("Added {} expense of {:.2} on {}", transaction.category, transaction.amount, transaction.date);
    Ok("Expense added successfully!".to_string())
}
