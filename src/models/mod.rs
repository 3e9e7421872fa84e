mod errors;
mod ledger;
mod record;

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub use errors::{LedgerError, ParseRecordError};
pub use ledger::Ledger;
pub use record::TransactionRecord;

/// Direction of a cash movement. The stored category text on a ledger line
/// is exactly `Deposit` or `Withdraw`, nothing else parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = ParseRecordError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Deposit" => Ok(TransactionKind::Deposit),
            "Withdraw" => Ok(TransactionKind::Withdraw),
            other => Err(ParseRecordError::UnknownCategory { category: other.to_string() }),
        }
    }
}
