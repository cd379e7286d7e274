use thiserror::Error;

use crate::core::account::{AccountId, Amount};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Occurs when a deposit or withdrawal is requested
    /// for a zero or negative amount.
    #[error("amount must be greater than zero, got {0}")]
    InvalidAmount(Amount),
    /// Occurs when a withdrawal exceeds the current balance
    /// of the account.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Amount,
        available: Amount
    },
    /// Occurs when a deposit would push the balance past
    /// the largest representable amount.
    #[error("balance overflow: cannot add {requested} to {available}")]
    BalanceOverflow {
        requested: Amount,
        available: Amount
    },
    /// Occurs when referencing an account by an id
    /// which was never issued by the ledger.
    #[error("no such account: {0}")]
    AccountNotFound(AccountId),
    /// Occurs when every identifier above the ledger's
    /// first id has already been issued.
    #[error("no account identifiers left to issue")]
    IdsExhausted
}

pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::LedgerError;
    use rust_decimal_macros::dec;

    #[test]
    fn messages() {
        assert_eq!(LedgerError::InvalidAmount(dec!(-5)).to_string(),
            "amount must be greater than zero, got -5");
        assert_eq!(LedgerError::InsufficientFunds { requested: dec!(1000), available: dec!(70) }.to_string(),
            "insufficient funds: requested 1000, available 70");
        assert_eq!(LedgerError::AccountNotFound(4242).to_string(), "no such account: 4242");
        assert_eq!(LedgerError::BalanceOverflow { requested: dec!(2), available: dec!(1) }.to_string(),
            "balance overflow: cannot add 2 to 1");
        assert_eq!(LedgerError::IdsExhausted.to_string(), "no account identifiers left to issue");
    }
}
