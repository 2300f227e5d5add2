//! Error types for the teller core
//!
//! Every expected business-rule failure is a `TellerError` value with a
//! human-readable message; front ends render `Display` and never see a panic.

use crate::currency::Currency;
use crate::types::{Cash, Timestamp};
use thiserror::Error;

/// Main error type for teller operations
#[derive(Error, Debug)]
pub enum TellerError {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(f64),

    #[error("Duration must be positive")]
    NonPositiveDuration,

    #[error("Account is locked until {until}")]
    AccountLocked { until: Timestamp },

    #[error("Incorrect PIN: {attempts_remaining} attempts remaining")]
    IncorrectPin { attempts_remaining: u32 },

    #[error("PIN must be exactly {expected} digits")]
    InvalidPin { expected: usize },

    #[error(
        "Daily withdrawal limit exceeded for {currency}: \
         {attempted} over a limit of {limit}"
    )]
    DailyLimitExceeded {
        currency: Currency,
        attempted: f64,
        limit: f64,
    },

    #[error(
        "Minimum balance requirement not met: \
         withdrawal would leave {would_leave}, floor is {floor}"
    )]
    BelowMinimumBalance { would_leave: Cash, floor: Cash },

    #[error("Insufficient funds: required {required}, available {available}")]
    InsufficientFunds { required: Cash, available: Cash },

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("User already registered: {0}")]
    DuplicateUser(String),

    #[error("Non-administrator user must have an account: {0}")]
    AccountRequired(String),

    #[error("No account registered for user: {0}")]
    AccountNotFound(String),

    #[error("No active loans")]
    NoLoans,

    #[error("Invalid loan index {index}: account has {count} active loans")]
    InvalidLoanIndex { index: usize, count: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for teller operations
pub type Result<T> = std::result::Result<T, TellerError>;
