use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::{Ledger, TransactionKind, TransactionRecord};
use crate::storage::{LedgerFile, StoreError};
use crate::types::Amount;

/// The transaction store: the in-memory ledger plus its on-disk mirror.
///
/// Every mutation is immediately followed by a synchronous full rewrite of
/// the backing file, so there is no unsaved state to track; a store opened
/// over an empty or missing file behaves exactly like a loaded one. The
/// in-memory side mutates first, so a failed write surfaces an error while
/// the session keeps the new state.
#[derive(Debug)]
pub struct CashStore {
    ledger: Ledger,
    file: LedgerFile,
}

impl CashStore {
    /// Opens the store over `path`, loading any records already on disk. A
    /// missing file starts an empty ledger; a malformed one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let file = LedgerFile::new(path);
        let ledger = file.load()?;

        info!("Loaded [{}] records from [{}]", ledger.records().len(), file.path().display());

        Ok(Self { ledger, file })
    }

    /// Records money coming in and returns the new balance.
    pub fn deposit(&mut self, amount: Amount, note: &str) -> Result<Amount, StoreError> {
        self.append(TransactionKind::Deposit, amount, note)
    }

    /// Records money going out and returns the new balance. The stored
    /// amount is the negation of `amount`.
    pub fn withdraw(&mut self, amount: Amount, note: &str) -> Result<Amount, StoreError> {
        self.append(TransactionKind::Withdraw, amount, note)
    }

    fn append(&mut self, kind: TransactionKind, amount: Amount, note: &str) -> Result<Amount, StoreError> {
        let record = TransactionRecord::new(kind, amount, note);

        debug!("Recorded [{}] of [{}] with note [{}]", record.kind, record.amount, record.note);

        self.ledger.append(record);
        self.file.save(&self.ledger)?;

        Ok(self.balance())
    }

    /// Removes the record at `index` and returns it.
    pub fn remove(&mut self, index: usize) -> Result<TransactionRecord, StoreError> {
        let removed = self.ledger.remove(index)?;

        debug!("Removed [{removed}] at index [{index}]");

        self.file.save(&self.ledger)?;

        Ok(removed)
    }

    /// Clears every record and persists the now-empty ledger.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.ledger.clear();
        self.file.save(&self.ledger)
    }

    /// Writes the current records to `destination`, then clears the default
    /// ledger and persists it empty.
    ///
    /// `None` stands for an abandoned destination choice: nothing is
    /// written, nothing is cleared, and no error is raised. A failed write
    /// to the destination also leaves the store untouched.
    pub fn export_and_clear(&mut self, destination: Option<&Path>) -> Result<(), StoreError> {
        let Some(destination) = destination else {
            debug!("Export skipped, no destination chosen");
            return Ok(());
        };

        LedgerFile::new(destination).save(&self.ledger)?;

        info!("Exported [{}] records to [{}]", self.ledger.records().len(), destination.display());

        self.reset()
    }

    /// Sum of all signed amounts currently in the ledger.
    pub fn balance(&self) -> Amount {
        self.ledger.balance()
    }

    pub fn records(&self) -> &[TransactionRecord] {
        self.ledger.records()
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
