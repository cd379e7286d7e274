mod core;
pub mod config;
pub mod menu;
pub mod report;

pub use crate::core::{Account, AccountId, Amount, Ledger, LedgerError, LedgerResult, SharedLedger};
pub use crate::core::{account, error, ledger};
pub use crate::config::TellerConfig;
