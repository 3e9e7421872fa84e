use thiserror::Error;

#[derive(Debug, Error)]
pub enum AmountError {
    #[error("Amount error: [{0}] is not a valid decimal number")]
    InvalidNumber(String),
}
