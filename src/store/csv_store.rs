use std::fs;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use csv::{ReaderBuilder, Terminator, Writer, WriterBuilder};
use log::{debug, info};
use crate::store::{HEADERS, RecordStore, StoreError};
use crate::transaction::Transaction;

/// Transactions stored as rows of a CSV file, one row per transaction
pub(crate) struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub(crate) fn new<P: Into<PathBuf>>(path: P) -> CsvStore {
        CsvStore { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: io::Error) -> StoreError {
        StoreError::Io(self.path.clone(), e)
    }

    /// Rows are CRLF terminated, the same as files written by Python's csv module
    fn writer(file: File) -> Writer<File> {
        WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file)
    }
}

impl RecordStore for CsvStore {
    fn initialize(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        // create_new so a file that appeared in the meantime is never truncated
        let file = match OpenOptions::new().write(true).create_new(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => return Ok(()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut writer = CsvStore::writer(file);
        writer.write_record(HEADERS)?;
        writer.flush().map_err(|e| self.io_error(e))?;

        info!("Created expense store {}", self.path.display());
        Ok(())
    }

    fn append(&self, transaction: &Transaction) -> Result<(), StoreError> {
        self.initialize()?;

        let file = OpenOptions::new().append(true).open(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = CsvStore::writer(file);
        writer.serialize(transaction)?;
        writer.flush().map_err(|e| self.io_error(e))?;

        debug!("Appended {:?} to {}", transaction, self.path.display());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Transaction>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Expense store {} doesn't exist yet", self.path.display());
                return Ok(vec![]);
            },
            Err(e) => return Err(self.io_error(e)),
        };

        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);
        // deserialize() swallows errors on the header row, so read it first
        if let Err(e) = reader.headers() {
            return Err(match e.is_io_error() {
                true => StoreError::Csv(e),
                false => StoreError::MalformedRecord { line: 1, message: e.to_string() },
            });
        }

        let mut transactions: Vec<Transaction> = vec![];
        for (i, result) in reader.deserialize::<Transaction>().enumerate() {
            match result {
                Ok(t) => transactions.push(t),
                Err(e) if e.is_io_error() => return Err(StoreError::Csv(e)),
                Err(e) => {
                    // Header is line 1, so the i-th record is on line i + 2 unless the reader knows better
                    let line = e.position().map_or(i as u64 + 2, |p| p.line());
                    return Err(StoreError::MalformedRecord { line, message: e.to_string() });
                }
            }
        }

        debug!("Loaded {} transactions from {}", transactions.len(), self.path.display());
        Ok(transactions)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use crate::category::Category;
    use crate::store::{CsvStore, RecordStore, StoreError};
    use crate::transaction::Transaction;

    const HEADER_ONLY: &str = "Date,Amount,Category,Description\r\n";

    fn store_in(dir: &TempDir) -> (CsvStore, PathBuf) {
        let path = dir.path().join("expenses.csv");
        (CsvStore::new(path.clone()), path)
    }

    #[test]
    fn test_initialize_writes_header_once() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);

        store.initialize().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), HEADER_ONLY);

        store.initialize().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), HEADER_ONLY);
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_initialize_keeps_existing_rows() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);

        store.append(&Transaction::new("2024-01-05", 12.5, Category::Food, "Lunch")).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        store.initialize().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert_eq!(store.read_all().unwrap().len(), 1);
    }

    #[test]
    fn test_initialize_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dir").join("expenses.csv");
        let store = CsvStore::new(path.clone());

        store.initialize().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), HEADER_ONLY);
    }

    #[test]
    fn test_read_missing_store_is_empty() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);

        assert!(store.read_all().unwrap().is_empty());
        // reading never creates the file
        assert!(!path.exists());
    }

    #[test]
    fn test_append_to_missing_store_writes_header() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);

        store.append(&Transaction::new("2024-01-06", 40.0, Category::Transport, "")).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Date,Amount,Category,Description");
        assert!(lines[1].starts_with("2024-01-06,40"));
        assert!(lines[1].ends_with(",Transport,"));
    }

    #[test]
    fn test_append_then_read_in_order() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);
        store.initialize().unwrap();

        let lunch = Transaction::new("2024-01-05", 12.50, Category::Food, "Lunch");
        let bus = Transaction::new("2024-01-06", 40.00, Category::Transport, "");
        let rent = Transaction::new("2024-01-01", 1200.0, Category::Housing, "January rent");
        store.append(&lunch).unwrap();
        store.append(&bus).unwrap();
        store.append(&rent).unwrap();

        let transactions = store.read_all().unwrap();
        assert_eq!(transactions, vec![lunch, bus, rent.clone()]);
        assert_eq!(transactions.last(), Some(&rent));
        assert_eq!(transactions[0].amount, 12.5);
        assert_eq!(transactions[1].description, "");
    }

    #[test]
    fn test_description_with_delimiters_round_trip() {
        let dir = TempDir::new().unwrap();
        let (store, _) = store_in(&dir);

        let t = Transaction::new("2024-02-14", 85.25, Category::Entertainment, r#"Dinner, "Le Bistro""#);
        store.append(&t).unwrap();

        assert_eq!(store.read_all().unwrap(), vec![t]);
    }

    #[test]
    fn test_reads_rows_written_without_trailing_zero() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        fs::write(&path, "Date,Amount,Category,Description\r\n2024-03-01,7,Other,\r\n2024-03-02,19.99,Utilities,Phone\r\n").unwrap();

        let transactions = store.read_all().unwrap();
        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].amount, 7.0);
        assert_eq!(transactions[1].category, Category::Utilities);
    }

    #[test]
    fn test_unreadable_store_is_an_error() {
        let dir = TempDir::new().unwrap();
        // exists, but is a directory
        let store = CsvStore::new(dir.path());

        assert!(matches!(store.read_all(), Err(StoreError::Csv(_))));

        let t = Transaction::new("2024-01-05", 12.5, Category::Food, "Lunch");
        assert!(matches!(store.append(&t), Err(StoreError::Io(..))));
    }

    #[test]
    fn test_malformed_header() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        fs::write(&path, b"Date,Amount,\xff\xfe,Description\n").unwrap();

        match store.read_all() {
            Err(StoreError::MalformedRecord { line, .. }) => assert_eq!(line, 1),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_malformed_amount() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        fs::write(&path, "Date,Amount,Category,Description\n2024-03-01,7,Other,\n2024-03-02,lots,Food,x\n").unwrap();

        match store.read_all() {
            Err(StoreError::MalformedRecord { line, .. }) => assert_eq!(line, 3),
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_unknown_category() {
        let dir = TempDir::new().unwrap();
        let (store, path) = store_in(&dir);
        fs::write(&path, "Date,Amount,Category,Description\n2024-03-01,7,Groceries,\n").unwrap();

        match store.read_all() {
            Err(StoreError::MalformedRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("Unexpected result {:?}", other),
        }
    }
}
