use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::error;

use crate::models::{Ledger, TransactionRecord};
use crate::storage::StoreError;

/// A ledger file on disk: one record per line, rewritten in full on every
/// save. The same type serves the default store file and export targets.
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole ledger back. A file that does not exist yields an
    /// empty ledger; the first line that does not match the grammar aborts
    /// the load with its 1-based line number.
    pub fn load(&self) -> Result<Ledger, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(Ledger::new()),
            Err(source) => {
                error!("Failed to read ledger file [{}]: {source}", self.path.display());
                return Err(StoreError::Io { path: self.path.clone(), source });
            }
        };

        let mut records = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let record: TransactionRecord =
                line.trim().parse().map_err(|source| StoreError::MalformedLine {
                    path: self.path.clone(),
                    line_number: index + 1,
                    source,
                })?;

            records.push(record);
        }

        Ok(Ledger::from_records(records))
    }

    /// Overwrites the file with the ledger's serialized form. This is never
    /// an append; an empty ledger truncates the file to zero bytes.
    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        fs::write(&self.path, render(ledger)).map_err(|source| {
            error!("Failed to write ledger file [{}]: {source}", self.path.display());
            StoreError::Io { path: self.path.clone(), source }
        })
    }
}

fn render(ledger: &Ledger) -> String {
    let mut text = String::new();

    for record in ledger.records() {
        text.push_str(&record.to_string());
        text.push('\n');
    }

    text
}
