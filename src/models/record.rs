use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::Local;

use crate::models::TransactionKind;
use crate::models::errors::ParseRecordError;
use crate::types::Amount;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One deposit or withdrawal event.
///
/// A record is exactly one ledger line:
/// `<timestamp> - <category> (<note>): <amount>`. `Display` writes that
/// line and `FromStr` reads it back; nothing outside this file knows the
/// delimiters.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// Wall-clock creation time, `YYYY-MM-DD HH:MM:SS`. Held as text and
    /// never re-parsed; a record loaded from disk keeps the file's value.
    pub timestamp: String,
    /// The category label. Redundant with the amount's sign, but kept so a
    /// rewritten file matches the loaded one byte for byte.
    pub kind: TransactionKind,
    /// Free text from the user, written verbatim. A note containing one of
    /// the delimiter sequences will not survive a reload intact.
    pub note: String,
    /// Signed amount: positive for deposits, negative for withdrawals.
    pub amount: Amount,
}

impl TransactionRecord {
    /// Creates a record stamped with the current local time.
    ///
    /// `amount` is the value as the user entered it; for [`TransactionKind::Withdraw`]
    /// it is negated here so the stored sign always encodes direction. The
    /// entered value itself is not validated: zero and negative inputs go
    /// through untouched.
    pub fn new(kind: TransactionKind, amount: Amount, note: &str) -> Self {
        let signed = match kind {
            TransactionKind::Deposit => amount,
            TransactionKind::Withdraw => -amount,
        };

        Self {
            timestamp: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            kind,
            note: note.to_string(),
            amount: signed,
        }
    }
}

impl Display for TransactionRecord {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} - {} ({}): {}",
            self.timestamp, self.kind, self.note, self.amount
        )
    }
}

impl FromStr for TransactionRecord {
    type Err = ParseRecordError;

    /// Parses one ledger line.
    ///
    /// Each delimiter split keeps the first two pieces and ignores the
    /// rest, so a note containing `" ("` parses back shortened while a note
    /// containing `" - "` usually leaves no `"): "` in the second piece and
    /// fails. Both outcomes match what the shell would have rewritten.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split(" - ");
        let timestamp = parts.next().unwrap_or("");
        let tail = parts.next().ok_or(ParseRecordError::MissingDelimiter { delimiter: " - " })?;

        let mut parts = tail.split("): ");
        let label = parts.next().unwrap_or("");
        let amount_text = parts.next().ok_or(ParseRecordError::MissingDelimiter { delimiter: "): " })?;

        let mut parts = label.split(" (");
        let category = parts.next().unwrap_or("");
        let note = parts.next().ok_or(ParseRecordError::MissingDelimiter { delimiter: " (" })?;

        Ok(Self {
            timestamp: timestamp.to_string(),
            kind: category.parse()?,
            note: note.to_string(),
            amount: amount_text.parse()?,
        })
    }
}
