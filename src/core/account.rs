use std::fmt;

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;

use crate::core::error::{LedgerError, LedgerResult};

pub type AccountId = u32;
pub type Amount = rust_decimal::Decimal;

/// A single holder's balance record.
///
/// Accounts are only ever created by a [`Ledger`](crate::Ledger), which
/// hands out the identifier. The balance never drops below zero: every
/// mutation is validated first and leaves the account untouched on error.
#[derive(Clone, PartialEq, Serialize)]
pub struct Account {
    id: AccountId,
    holder_name: String,
    balance: Amount,
    opened_at: DateTime<Utc>
}

impl Account {
    pub(crate) fn new(id: AccountId, holder_name: &str) -> Account {
        Account {
            id,
            holder_name: holder_name.to_owned(),
            balance: Amount::ZERO,
            opened_at: Utc::now()
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Adds `amount` to the balance and returns the new balance.
    pub fn deposit_funds(&mut self, amount: Amount) -> LedgerResult<Amount> {
        self.check_positive(amount)?;
        let Some(balance) = self.balance.checked_add(amount) else {
            warn!("account {}: deposit of {} would overflow balance {}", self.id, amount, self.balance);
            return Err(LedgerError::BalanceOverflow { requested: amount, available: self.balance });
        };

        self.balance = balance;
        info!("account {}: deposited {}, new balance {}", self.id, amount, self.balance);
        Ok(self.balance)
    }

    /// Takes `amount` out of the balance and returns the new balance.
    pub fn withdraw_funds(&mut self, amount: Amount) -> LedgerResult<Amount> {
        self.check_positive(amount)?;
        if amount > self.balance {
            warn!("account {}: withdrawal of {} refused, balance {}", self.id, amount, self.balance);
            return Err(LedgerError::InsufficientFunds { requested: amount, available: self.balance });
        }

        self.balance -= amount;
        info!("account {}: withdrew {}, new balance {}", self.id, amount, self.balance);
        Ok(self.balance)
    }

    fn check_positive(&self, amount: Amount) -> LedgerResult<()> {
        if amount <= Amount::ZERO {
            warn!("account {}: rejected non-positive amount {}", self.id, amount);
            return Err(LedgerError::InvalidAmount(amount));
        }
        Ok(())
    }
}

/// Sum of the balances, or `None` when it exceeds the largest amount.
pub fn total_balance<'a>(accounts: impl IntoIterator<Item = &'a Account>) -> Option<Amount> {
    accounts.into_iter()
        .try_fold(Amount::ZERO, |total, account| total.checked_add(account.balance))
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.id, self.holder_name, self.balance)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Account {} ({}) {}", self.id, self.holder_name, self.balance)
    }
}
