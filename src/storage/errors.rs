use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::{LedgerError, ParseRecordError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Ledger file [{path}] could not be accessed: {source}", path = .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("Malformed line [{line_number}] in ledger file [{path}]: {source}", path = .path.display())]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        source: ParseRecordError,
    },
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
