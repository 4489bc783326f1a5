use std::collections::HashMap;
use crate::category::Category;
use crate::transaction::Transaction;

/// An ordered selection of transactions with the sum of their amounts
#[derive(Debug, PartialEq)]
pub(crate) struct Listing<'a> {
    pub(crate) transactions: Vec<&'a Transaction>,
    pub(crate) total: f64,
}

impl<'a> Listing<'a> {
    fn new<I: Iterator<Item = &'a Transaction>>(iter: I) -> Listing<'a> {
        let transactions: Vec<&Transaction> = iter.collect();
        let total = transactions.iter().map(|t| t.amount).fold(0.0, |total, amount| total + amount);
        Listing { transactions, total }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

/// Per-category totals. Categories appear in the order they were first seen.
#[derive(Debug, PartialEq)]
pub(crate) struct Summary {
    totals: Vec<(Category, f64)>,
    index: HashMap<Category, usize>,
}

impl Summary {
    fn new() -> Summary {
        Summary { totals: vec![], index: HashMap::new() }
    }

    fn add(&mut self, category: Category, amount: f64) {
        match self.index.get(&category) {
            Some(i) => self.totals[*i].1 += amount,
            None => {
                self.index.insert(category, self.totals.len());
                self.totals.push((category, amount));
            }
        }
    }

    pub(crate) fn totals(&self) -> &[(Category, f64)] {
        &self.totals
    }

    /// Sum of all category totals
    pub(crate) fn grand_total(&self) -> f64 {
        self.totals.iter().map(|(_, total)| total).fold(0.0, |sum, total| sum + total)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

/// All transactions, unchanged, with the total expenditure
pub(crate) fn list_all(transactions: &[Transaction]) -> Listing {
    Listing::new(transactions.iter())
}

/// Transactions of one category in their original order, with the subtotal
pub(crate) fn list_by_category(transactions: &[Transaction], category: Category) -> Listing {
    Listing::new(transactions.iter().filter(|t| t.category == category))
}

pub(crate) fn summarize(transactions: &[Transaction]) -> Summary {
    let mut summary = Summary::new();
    for t in transactions {
        summary.add(t.category, t.amount);
    }
    summary
}
