use chrono::{Local, NaiveDate};
use log::warn;
use serde::{Deserialize, Serialize};
use crate::category::Category;
use crate::common::Error;

/// Date format used when defaulting to today, also the format dates are checked against
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// A logged expense. Field order is the column order of the store file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct Transaction {
    pub(crate) date: String,
    pub(crate) amount: f64,
    pub(crate) category: Category,
    pub(crate) description: String,
}

impl Transaction {
    pub(crate) fn new(date: &str, amount: f64, category: Category, description: &str) -> Transaction {
        let description = description.trim().replace(['\r', '\n'], " ");
        Transaction {
            date: date.trim().to_string(),
            amount,
            category,
            description,
        }
    }
}

/// Amount must be a finite, non-negative number
pub(crate) fn validate_amount(amount: f64) -> Result<f64, Error> {
    if !amount.is_finite() {
        return Err(Error::new(format!("Amount must be a number, got {}", amount)));
    }
    if amount < 0.0 {
        return Err(Error::new(format!("Amount must not be negative, got {}", amount)));
    }
    Ok(amount)
}

/// Returns the given date, or today's date when none was supplied.
/// Dates are free text, an unexpected format is only warned about.
pub(crate) fn resolve_date(date: Option<&str>) -> String {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => {
            if NaiveDate::parse_from_str(d, DATE_FORMAT).is_err() {
                warn!("Date '{}' is not in YYYY-MM-DD format, storing as-is", d);
            }
            d.to_string()
        },
        None => today()
    }
}

pub(crate) fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
