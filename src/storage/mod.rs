mod errors;
mod ledger_file;
mod store;

pub use errors::StoreError;
pub use ledger_file::LedgerFile;
pub use store::CashStore;
