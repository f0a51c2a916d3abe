//! Virtual-currency ledger gating paid features such as hints.

use std::collections::HashMap;

use thiserror::Error;

use crate::common::PlayerId;

/// The only hard error in the system; `InsufficientFunds` is surfaced
/// verbatim to the player.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("not enough diamonds: need {required}, you have {balance}")]
    InsufficientFunds { required: i64, balance: i64 },
    /// Storage failure in a persistent implementation.
    #[error("ledger backend error: {0}")]
    Backend(String),
}

/// Currency storage. A durable implementation lives with the bot
/// deployment; the crate ships [`MemoryLedger`].
pub trait Ledger {
    /// Current balance, creating a zero account on first sight.
    fn get_balance(&mut self, user: PlayerId) -> Result<i64, LedgerError>;

    /// Apply `delta` (negative to charge). Fails without mutating when
    /// the balance would go negative; returns the new balance otherwise.
    fn change_balance(&mut self, user: PlayerId, delta: i64) -> Result<i64, LedgerError>;
}

/// In-memory ledger for tests and single-process deployments.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    accounts: HashMap<PlayerId, i64>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account up front.
    pub fn with_account(mut self, user: PlayerId, balance: i64) -> Self {
        self.accounts.insert(user, balance);
        self
    }
}

impl Ledger for MemoryLedger {
    fn get_balance(&mut self, user: PlayerId) -> Result<i64, LedgerError> {
        Ok(*self.accounts.entry(user).or_insert(0))
    }

    fn change_balance(&mut self, user: PlayerId, delta: i64) -> Result<i64, LedgerError> {
        let balance = *self.accounts.entry(user).or_insert(0);
        let new_balance = balance + delta;
        if new_balance < 0 {
            return Err(LedgerError::InsufficientFunds {
                required: -delta,
                balance,
            });
        }
        self.accounts.insert(user, new_balance);
        Ok(new_balance)
    }
}
