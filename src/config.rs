//! Immutable teller configuration
//!
//! Conversion rates, daily limits and the lockout policy are plain
//! configuration structs handed to the components that need them, which
//! keeps the core reentrant and lets tests swap values freely.

use crate::constants::{
    DAILY_LIMIT_EUR, DAILY_LIMIT_PKR, DAILY_LIMIT_USD, FREEZE_DAYS, LOAN_INTEREST_RATE,
    LOCKOUT_MINUTES, MAX_PIN_ATTEMPTS, SAVINGS_MIN_BALANCE,
};
use crate::currency::{Currency, CurrencyConverter};
use crate::types::Cash;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-currency daily withdrawal ceilings
///
/// Limits are expressed in the withdrawal currency itself (500 USD, not its
/// PKR equivalent), matching how the acting user's counters accumulate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyLimits {
    limits: HashMap<Currency, f64>,
}

impl DailyLimits {
    pub fn new(limits: HashMap<Currency, f64>) -> Self {
        Self { limits }
    }

    /// Ceiling for a currency, `None` when no limit is configured
    pub fn limit(&self, currency: Currency) -> Option<f64> {
        self.limits.get(&currency).copied()
    }
}

impl Default for DailyLimits {
    fn default() -> Self {
        let mut limits = HashMap::new();
        limits.insert(Currency::PKR, DAILY_LIMIT_PKR);
        limits.insert(Currency::USD, DAILY_LIMIT_USD);
        limits.insert(Currency::EUR, DAILY_LIMIT_EUR);
        Self { limits }
    }
}

/// Failed-attempt threshold and lockout durations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockoutPolicy {
    /// Failed attempts before the account locks
    pub max_attempts: u32,
    /// Length of an automatic lockout, in minutes
    pub lock_minutes: i64,
    /// Length of an administrative freeze, in days
    pub freeze_days: i64,
}

impl LockoutPolicy {
    pub fn lock_duration(&self) -> Duration {
        Duration::minutes(self.lock_minutes)
    }

    pub fn freeze_duration(&self) -> Duration {
        Duration::days(self.freeze_days)
    }
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_PIN_ATTEMPTS,
            lock_minutes: LOCKOUT_MINUTES,
            freeze_days: FREEZE_DAYS,
        }
    }
}

/// Aggregate configuration threaded through account and user operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TellerConfig {
    pub converter: CurrencyConverter,
    pub daily_limits: DailyLimits,
    pub lockout: LockoutPolicy,
    /// Minimum post-withdrawal balance for savings accounts, in base units
    pub savings_floor: Cash,
    /// Fixed annual loan interest rate
    pub loan_interest_rate: f64,
}

impl Default for TellerConfig {
    fn default() -> Self {
        Self {
            converter: CurrencyConverter::default(),
            daily_limits: DailyLimits::default(),
            lockout: LockoutPolicy::default(),
            savings_floor: SAVINGS_MIN_BALANCE,
            loan_interest_rate: LOAN_INTEREST_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let limits = DailyLimits::default();
        assert_eq!(limits.limit(Currency::PKR), Some(20_000.0));
        assert_eq!(limits.limit(Currency::USD), Some(500.0));
        assert_eq!(limits.limit(Currency::EUR), Some(600.0));
    }

    #[test]
    fn test_default_lockout_policy() {
        let policy = LockoutPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.lock_duration(), Duration::minutes(2));
        assert_eq!(policy.freeze_duration(), Duration::days(365));
    }

    #[test]
    fn test_default_config() {
        let config = TellerConfig::default();
        assert_eq!(config.savings_floor, 1_000.0);
        assert_eq!(config.loan_interest_rate, 0.03);
        assert!(config.converter.supports(Currency::EUR));
    }
}
