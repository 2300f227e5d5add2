//! Fixed rates, limits and policy defaults
//!
//! Contains the default values used to build configuration structs. The live
//! values always come from a [`TellerConfig`](crate::config::TellerConfig),
//! never from these constants directly.

/// Default conversion rates into the base currency (PKR)
pub const RATE_USD_TO_PKR: f64 = 280.0;
pub const RATE_EUR_TO_PKR: f64 = 300.0;

/// Default per-currency daily withdrawal ceilings
pub const DAILY_LIMIT_PKR: f64 = 20_000.0;
pub const DAILY_LIMIT_USD: f64 = 500.0;
pub const DAILY_LIMIT_EUR: f64 = 600.0;

/// Minimum balance a savings account must retain after a withdrawal
pub const SAVINGS_MIN_BALANCE: f64 = 1_000.0;

/// Fixed annual loan interest rate
pub const LOAN_INTEREST_RATE: f64 = 0.03;

/// Authentication policy defaults
pub const MAX_PIN_ATTEMPTS: u32 = 3;
pub const LOCKOUT_MINUTES: i64 = 2;
pub const FREEZE_DAYS: i64 = 365;
pub const PIN_LENGTH: usize = 4;

/// Number of log entries returned by recent-transaction queries
pub const RECENT_TRANSACTIONS: usize = 10;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Zero tolerance for floating point comparisons
pub const ZERO_TOLERANCE: f64 = 1e-10;
