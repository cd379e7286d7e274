pub mod account;
pub mod error;
pub mod ledger;

pub use account::{Account, AccountId, Amount};
pub use error::{LedgerError, LedgerResult};
pub use ledger::{Ledger, SharedLedger};
