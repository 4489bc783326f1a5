use comfy_table::{Cell, CellAlignment, Table, TableComponent};
use crate::category::Category;
use crate::report::{Listing, Summary};

/// Format amount with 2 decimals, no currency symbol
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.remove_style(TableComponent::HorizontalLines);
    table.remove_style(TableComponent::MiddleIntersections);
    table.remove_style(TableComponent::LeftBorderIntersections);
    table.remove_style(TableComponent::RightBorderIntersections);
    table
}

/// All expenses, numbered from 1, followed by the total expenditure
pub(crate) fn render_listing(listing: &Listing) -> String {
    if listing.is_empty() {
        return "No expenses recorded yet!".to_string();
    }

    let mut table = new_table();
    table.set_header(vec!["#", "Date", "Amount", "Category", "Description"]);
    for (i, t) in listing.transactions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(t.date.as_str()),
            Cell::new(format_amount(t.amount)).set_alignment(CellAlignment::Right),
            Cell::new(t.category.name()),
            Cell::new(t.description.as_str()),
        ]);
    }

    format!("{table}\nTotal Expenditure: {}", format_amount(listing.total))
}

/// Expenses of a single category. The category column is left out since it's the same for every row.
pub(crate) fn render_category_listing(listing: &Listing, category: Category) -> String {
    if listing.is_empty() {
        return format!("No expenses found in {} category", category);
    }

    let mut table = new_table();
    table.set_header(vec!["#", "Date", "Amount", "Description"]);
    for (i, t) in listing.transactions.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Right),
            Cell::new(t.date.as_str()),
            Cell::new(format_amount(t.amount)).set_alignment(CellAlignment::Right),
            Cell::new(t.description.as_str()),
        ]);
    }

    format!("{table}\nTotal in {}: {}", category, format_amount(listing.total))
}

pub(crate) fn render_summary(summary: &Summary) -> String {
    if summary.is_empty() {
        return "No expenses to summarize!".to_string();
    }

    let mut table = new_table();
    table.set_header(vec!["Category", "Total"]);
    for (category, total) in summary.totals() {
        table.add_row(vec![
            Cell::new(category.name()),
            Cell::new(format_amount(*total)).set_alignment(CellAlignment::Right),
        ]);
    }

    format!("{table}\nGrand Total: {}", format_amount(summary.grand_total()))
}
