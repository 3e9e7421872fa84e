use thiserror::Error;

use crate::types::AmountError;

#[derive(Debug, Error)]
pub enum ParseRecordError {
    #[error("Line is missing the [{delimiter}] separator")]
    MissingDelimiter { delimiter: &'static str },
    #[error("Unknown transaction category [{category}]")]
    UnknownCategory { category: String },
    #[error("Amount field is not readable: {0}")]
    InvalidAmount(#[from] AmountError),
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Index [{index}] is out of range for a ledger holding [{len}] records")]
    IndexOutOfRange { index: usize, len: usize },
}
