use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::common::Error;

/// Expense category. The set is closed and its order is stable, the order is also
/// the menu order shown to the user (1-based).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Food,
    Transport,
    Housing,
    Entertainment,
    Utilities,
    Other,
}

impl Category {
    pub(crate) const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Housing,
        Category::Entertainment,
        Category::Utilities,
        Category::Other,
    ];

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }

    /// 1-based menu number
    pub(crate) fn number(&self) -> usize {
        Category::ALL.iter().position(|c| c == self).map_or(0, |i| i + 1)
    }

    pub(crate) fn from_number(number: usize) -> Option<Category> {
        if number == 0 {
            return None;
        }
        Category::ALL.get(number - 1).copied()
    }

    /// Numbered list, one category per line, e.g. `1. Food`
    pub(crate) fn menu() -> String {
        Category::ALL.iter()
            .map(|c| format!("{}. {}", c.number(), c.name()))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Accepts a category name (case-insensitive) or its menu number.
impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(number) = s.parse::<usize>() {
            return Category::from_number(number).ok_or_else(|| Error::new(
                format!("Category number must be between 1 and {}, got {}", Category::ALL.len(), number)
            ));
        }

        Category::ALL.iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                let names: Vec<&str> = Category::ALL.iter().map(|c| c.name()).collect();
                Error::new(format!("Unknown category '{}', expected one of: {}", s, names.join(", ")))
            })
    }
}
