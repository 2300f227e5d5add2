//! ATM registry and session entry point
//!
//! Maps user identities to `(User, Account)` pairs, authenticates logins and
//! exposes the administrative views. Every account or user operation goes
//! through here so the registry can supply the shared configuration and the
//! clock; front ends hold only identities and raw input strings.

use crate::account::{
    Account, DepositReceipt, LoanReceipt, LogEntry, PaymentReceipt, WithdrawalReceipt,
};
use crate::clock::{Clock, SystemClock};
use crate::config::TellerConfig;
use crate::currency::Currency;
use crate::error::{Result, TellerError};
use crate::loan::{Loan, LoanTerm};
use crate::types::{Cash, UserId};
use crate::user::User;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of users and their accounts
///
/// Administrators may be registered without an account; every other identity
/// in the user registry has a matching account entry.
pub struct Atm {
    users: HashMap<UserId, User>,
    accounts: HashMap<UserId, Account>,
    config: TellerConfig,
    clock: Arc<dyn Clock>,
}

impl Atm {
    pub fn new() -> Self {
        Self::with_config(TellerConfig::default())
    }

    pub fn with_config(config: TellerConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Build with an explicit clock, the seam tests use to control time
    pub fn with_clock(config: TellerConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            users: HashMap::new(),
            accounts: HashMap::new(),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &TellerConfig {
        &self.config
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Register a user and, for non-administrators, their account
    pub fn add_user(&mut self, user: User, account: Option<Account>) -> Result<()> {
        if self.users.contains_key(&user.user_id) {
            return Err(TellerError::DuplicateUser(user.user_id.clone()));
        }
        match account {
            Some(account) => {
                self.accounts.insert(user.user_id.clone(), account);
            }
            None if user.is_admin => {}
            None => return Err(TellerError::AccountRequired(user.user_id.clone())),
        }
        log::info!("registered user {} ({})", user.user_id, user.name);
        self.users.insert(user.user_id.clone(), user);
        Ok(())
    }

    /// Authenticate an identity, returning the user on success
    ///
    /// Unknown identities and failed verifications are ordinary `Err`
    /// values; nothing here panics on bad input.
    pub fn login(&mut self, user_id: &str, pin: &str) -> Result<&User> {
        let now = self.clock.now();
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| TellerError::UserNotFound(user_id.to_string()))?;
        user.verify_pin(pin, &self.config.lockout, now)?;
        Ok(&*user)
    }

    pub fn user(&self, user_id: &str) -> Result<&User> {
        self.users
            .get(user_id)
            .ok_or_else(|| TellerError::UserNotFound(user_id.to_string()))
    }

    /// All registered users, in arbitrary order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    /// Admin view: recent transactions per account as
    /// `(user_id, name, entries)`
    pub fn all_transactions(&self) -> Vec<(&str, &str, &[LogEntry])> {
        self.accounts
            .iter()
            .filter_map(|(user_id, account)| {
                let user = self.users.get(user_id)?;
                Some((
                    user_id.as_str(),
                    user.name.as_str(),
                    account.recent_transactions(),
                ))
            })
            .collect()
    }

    /// Admin operation: lock an identity out far into the future
    pub fn freeze_user(&mut self, user_id: &str) -> Result<()> {
        let now = self.clock.now();
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| TellerError::UserNotFound(user_id.to_string()))?;
        user.freeze(&self.config.lockout, now);
        Ok(())
    }

    fn account(&self, user_id: &str) -> Result<&Account> {
        self.accounts
            .get(user_id)
            .ok_or_else(|| TellerError::AccountNotFound(user_id.to_string()))
    }

    /// Balance of an identity's account, in base units
    pub fn balance(&self, user_id: &str) -> Result<Cash> {
        Ok(self.account(user_id)?.balance())
    }

    /// Active loans of an identity's account
    pub fn loans(&self, user_id: &str) -> Result<&[Loan]> {
        Ok(self.account(user_id)?.loans())
    }

    /// Most recent transactions of an identity's account
    pub fn transactions(&self, user_id: &str) -> Result<&[LogEntry]> {
        Ok(self.account(user_id)?.recent_transactions())
    }

    pub fn deposit(
        &mut self,
        user_id: &str,
        amount: f64,
        currency: Currency,
    ) -> Result<DepositReceipt> {
        let now = self.clock.now();
        let account = self
            .accounts
            .get_mut(user_id)
            .ok_or_else(|| TellerError::AccountNotFound(user_id.to_string()))?;
        account.deposit(amount, currency, &self.config, now)
    }

    /// Withdraw against both the account balance and the acting user's
    /// daily counters
    pub fn withdraw(
        &mut self,
        user_id: &str,
        amount: f64,
        currency: Currency,
    ) -> Result<WithdrawalReceipt> {
        let now = self.clock.now();
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| TellerError::UserNotFound(user_id.to_string()))?;
        let account = self
            .accounts
            .get_mut(user_id)
            .ok_or_else(|| TellerError::AccountNotFound(user_id.to_string()))?;
        account.withdraw(amount, currency, user, &self.config, now)
    }

    pub fn take_loan(
        &mut self,
        user_id: &str,
        principal: f64,
        currency: Currency,
        term: LoanTerm,
    ) -> Result<LoanReceipt> {
        let now = self.clock.now();
        let account = self
            .accounts
            .get_mut(user_id)
            .ok_or_else(|| TellerError::AccountNotFound(user_id.to_string()))?;
        account.take_loan(principal, currency, term, &self.config, now)
    }

    pub fn pay_loan(
        &mut self,
        user_id: &str,
        index: usize,
        amount: f64,
    ) -> Result<PaymentReceipt> {
        let now = self.clock.now();
        let account = self
            .accounts
            .get_mut(user_id)
            .ok_or_else(|| TellerError::AccountNotFound(user_id.to_string()))?;
        account.pay_loan(index, amount, &self.config, now)
    }

    pub fn change_pin(&mut self, user_id: &str, old_pin: &str, new_pin: &str) -> Result<()> {
        let now = self.clock.now();
        let user = self
            .users
            .get_mut(user_id)
            .ok_or_else(|| TellerError::UserNotFound(user_id.to_string()))?;
        user.change_pin(old_pin, new_pin, &self.config.lockout, now)
    }
}

impl Default for Atm {
    fn default() -> Self {
        Self::new()
    }
}
