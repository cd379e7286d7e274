use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{Arc, Mutex};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};

use crate::core::account::{self, Account, AccountId, Amount};
use crate::core::error::{LedgerError, LedgerResult};

type AccountMap = BTreeMap<AccountId, Account>;

/// A ledger shared between threads. Balance checks and updates are
/// serialised by the single lock.
pub type SharedLedger = Arc<Mutex<Ledger>>;

/// Registry owning every account and handing out their identifiers.
pub struct Ledger {
    // one past the last issued id, so the largest AccountId stays issuable
    next_id: AtomicU64,
    accounts: AccountMap
}

impl Ledger {
    pub const FIRST_ACCOUNT_ID: AccountId = 1000;

    pub fn new() -> Ledger {
        Ledger::with_first_id(Self::FIRST_ACCOUNT_ID)
    }

    pub fn with_first_id(first_id: AccountId) -> Ledger {
        Ledger { next_id: AtomicU64::new(u64::from(first_id)), accounts: BTreeMap::new() }
    }

    /// Moves the ledger behind a lock for use from several threads.
    pub fn into_shared(self) -> SharedLedger {
        Arc::new(Mutex::new(self))
    }

    /// Fails only once every identifier up to `AccountId::MAX` is used.
    pub fn open_account(&mut self, holder_name: &str) -> LedgerResult<&Account> {
        let id = self.allocate_id()?;
        match self.accounts.entry(id) {
            Entry::Vacant(slot) => {
                info!("opened account {} for {}", id, holder_name);
                Ok(&*slot.insert(Account::new(id, holder_name)))
            },
            Entry::Occupied(_) => Err(LedgerError::IdsExhausted)
        }
    }

    /// Absence is an expected outcome, hence `Option` rather than an error.
    pub fn find_account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn find_account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    /// All accounts in the order they were opened.
    pub fn list_accounts(&self) -> Vec<&Account> {
        self.accounts.values().collect()
    }

    pub fn deposit(&mut self, id: AccountId, amount: Amount) -> LedgerResult<Amount> {
        self.require_mut(id)?.deposit_funds(amount)
    }

    pub fn withdraw(&mut self, id: AccountId, amount: Amount) -> LedgerResult<Amount> {
        self.require_mut(id)?.withdraw_funds(amount)
    }

    pub fn balance(&self, id: AccountId) -> LedgerResult<Amount> {
        self.find_account(id)
            .map(Account::balance)
            .ok_or(LedgerError::AccountNotFound(id))
    }

    /// `None` when the sum exceeds the largest representable amount.
    pub fn total_holdings(&self) -> Option<Amount> {
        account::total_balance(self.accounts.values())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn require_mut(&mut self, id: AccountId) -> LedgerResult<&mut Account> {
        match self.accounts.get_mut(&id) {
            Some(account) => Ok(account),
            None => {
                debug!("lookup of unknown account {}", id);
                Err(LedgerError::AccountNotFound(id))
            }
        }
    }

    fn allocate_id(&self) -> LedgerResult<AccountId> {
        let limit = u64::from(AccountId::MAX);
        self.next_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| (next <= limit).then(|| next + 1))
            .ok()
            .and_then(|id| AccountId::try_from(id).ok())
            .ok_or_else(|| {
                warn!("account identifiers exhausted");
                LedgerError::IdsExhausted
            })
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Ledger::new()
    }
}
