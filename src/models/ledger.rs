use crate::models::TransactionRecord;
use crate::models::errors::LedgerError;
use crate::types::Amount;

/// The ordered, insertion-order-preserving collection of records.
///
/// Order is chronological by append and never re-sorted; positional removal
/// keeps the relative order of the survivors. The derived balance is always
/// the sum of the signed amounts currently held.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<TransactionRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    /// Appends a record at the end.
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Removes and returns the record at `index`, shifting later records
    /// down by one. Out of range leaves the ledger untouched.
    pub fn remove(&mut self, index: usize) -> Result<TransactionRecord, LedgerError> {
        if index >= self.records.len() {
            return Err(LedgerError::IndexOutOfRange { index, len: self.records.len() });
        }

        Ok(self.records.remove(index))
    }

    /// Drops every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Sum of all signed amounts currently held.
    pub fn balance(&self) -> Amount {
        self.records.iter().map(|record| record.amount).sum()
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }
}
