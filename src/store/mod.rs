mod csv_store;

use std::{fmt, io};
use std::path::PathBuf;
use crate::transaction::Transaction;

pub(crate) use csv_store::CsvStore;

/// Column names of the store file, in order
pub(crate) const HEADERS: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// Durable, append-only storage of transactions.
/// Callers validate transactions before appending, the store writes what it is given.
pub(crate) trait RecordStore {
    /// Create the store with its header if it doesn't exist. Never touches an existing store.
    fn initialize(&self) -> Result<(), StoreError>;

    /// Append a single transaction
    fn append(&self, transaction: &Transaction) -> Result<(), StoreError>;

    /// All transactions in the order they were appended. A store that doesn't exist yet is empty.
    fn read_all(&self) -> Result<Vec<Transaction>, StoreError>;
}

#[derive(Debug)]
pub(crate) enum StoreError {
    Io(PathBuf, io::Error),
    Csv(csv::Error),
    /// A stored row that can't be decoded into a transaction. `line` is 1-based and counts the header.
    MalformedRecord { line: u64, message: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StoreError::Io(path, e) => write!(f, "store error: {}: {}", path.display(), e),
            StoreError::Csv(e) => write!(f, "store error: {}", e),
            StoreError::MalformedRecord { line, message } => write!(f, "store error: malformed record on line {}: {}", line, message),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(_, e) => Some(e),
            StoreError::Csv(e) => Some(e),
            StoreError::MalformedRecord { .. } => None,
        }
    }
}

impl From<csv::Error> for StoreError {
    fn from(e: csv::Error) -> Self {
        StoreError::Csv(e)
    }
}
