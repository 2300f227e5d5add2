//! User identity, PIN credential and lockout state machine
//!
//! A user stores only the SHA-256 digest of their PIN, never the raw string.
//! Lockout is a single time-bounded state: three failed attempts set an
//! expiry two minutes out, and an administrative freeze sets the same expiry
//! a year out. Expiry is checked lazily at each verification, never cleared
//! eagerly. Daily withdrawal counters live on the user (not the account) and
//! reset lazily on the first access of a new calendar day.

use crate::config::LockoutPolicy;
use crate::constants::PIN_LENGTH;
use crate::currency::Currency;
use crate::error::{Result, TellerError};
use crate::types::{Timestamp, UserId};
use chrono::NaiveDate;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A registered user of the teller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Identity key, unique across the registry
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Administrators may have no account and see the admin operations
    pub is_admin: bool,

    pin_hash: String,
    failed_attempts: u32,
    locked_until: Option<Timestamp>,

    /// Amount withdrawn today per currency, in that currency's own units
    daily_withdrawn: HashMap<Currency, f64>,
    last_reset: NaiveDate,
}

fn hash_pin(pin: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(pin.as_bytes());
    format!("{:x}", hasher.finalize())
}

impl User {
    pub fn new(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        pin: &str,
        today: NaiveDate,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            name: name.into(),
            is_admin: false,
            pin_hash: hash_pin(pin),
            failed_attempts: 0,
            locked_until: None,
            daily_withdrawn: HashMap::new(),
            last_reset: today,
        }
    }

    pub fn admin(
        user_id: impl Into<UserId>,
        name: impl Into<String>,
        pin: &str,
        today: NaiveDate,
    ) -> Self {
        Self {
            is_admin: true,
            ..Self::new(user_id, name, pin, today)
        }
    }

    /// Whether the lockout expiry is set and still in the future
    pub fn is_locked(&self, now: Timestamp) -> bool {
        matches!(self.locked_until, Some(until) if now < until)
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Verify a PIN candidate against the stored credential
    ///
    /// A locked user fails without touching the attempt counter. A match
    /// resets the counter; a mismatch increments it, and the attempt that
    /// reaches the policy threshold sets the lockout expiry.
    pub fn verify_pin(&mut self, pin: &str, policy: &LockoutPolicy, now: Timestamp) -> Result<()> {
        if let Some(until) = self.locked_until {
            if now < until {
                return Err(TellerError::AccountLocked { until });
            }
        }

        if self.pin_hash == hash_pin(pin) {
            self.failed_attempts = 0;
            return Ok(());
        }

        self.failed_attempts += 1;
        if self.failed_attempts >= policy.max_attempts {
            let until = now + policy.lock_duration();
            self.locked_until = Some(until);
            log::warn!(
                "user {} locked until {} after {} failed attempts",
                self.user_id,
                until,
                self.failed_attempts
            );
            return Err(TellerError::AccountLocked { until });
        }

        Err(TellerError::IncorrectPin {
            attempts_remaining: policy.max_attempts - self.failed_attempts,
        })
    }

    /// Replace the stored credential after re-verifying the old PIN
    ///
    /// The new PIN must be exactly four ASCII digits. Verification of the old
    /// PIN carries its usual side effects on the attempt counter and lockout.
    pub fn change_pin(
        &mut self,
        old_pin: &str,
        new_pin: &str,
        policy: &LockoutPolicy,
        now: Timestamp,
    ) -> Result<()> {
        if new_pin.len() != PIN_LENGTH || !new_pin.chars().all(|c| c.is_ascii_digit()) {
            return Err(TellerError::InvalidPin {
                expected: PIN_LENGTH,
            });
        }
        self.verify_pin(old_pin, policy, now)?;
        self.pin_hash = hash_pin(new_pin);
        log::info!("user {} changed PIN", self.user_id);
        Ok(())
    }

    /// Zero the daily counters on the first access of a new calendar day
    pub fn reset_daily_withdrawals(&mut self, today: NaiveDate) {
        if self.last_reset != today {
            self.daily_withdrawn.clear();
            self.last_reset = today;
        }
    }

    /// Amount withdrawn today in `currency`, in that currency's units
    pub fn daily_withdrawn(&self, currency: Currency) -> f64 {
        self.daily_withdrawn.get(&currency).copied().unwrap_or(0.0)
    }

    /// Accumulate a successful withdrawal against today's counter
    pub fn record_withdrawal(&mut self, currency: Currency, amount: f64) {
        *self.daily_withdrawn.entry(currency).or_insert(0.0) += amount;
    }

    /// Administrative freeze: a lockout expiry far in the future
    pub fn freeze(&mut self, policy: &LockoutPolicy, now: Timestamp) {
        let until = now + policy.freeze_duration();
        self.locked_until = Some(until);
        log::info!("user {} frozen until {}", self.user_id, until);
    }
}
