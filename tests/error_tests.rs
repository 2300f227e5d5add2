//! Error message formatting tests
//!
//! Front ends show `Display` output directly to users, so the wording of
//! each variant is part of the contract.

use chrono::{TimeZone, Utc};
use rusty_teller::currency::Currency;
use rusty_teller::error::TellerError;

#[test]
fn test_unsupported_currency_message() {
    let err = TellerError::UnsupportedCurrency("GBP".to_string());
    assert_eq!(err.to_string(), "Unsupported currency: GBP");
}

#[test]
fn test_non_positive_amount_message() {
    let err = TellerError::NonPositiveAmount(-5.0);
    let msg = err.to_string();
    assert!(msg.contains("must be positive"));
    assert!(msg.contains("-5"));
}

#[test]
fn test_account_locked_message() {
    let until = Utc.with_ymd_and_hms(2024, 6, 1, 10, 2, 0).unwrap();
    let err = TellerError::AccountLocked { until };
    let msg = err.to_string();
    assert!(msg.contains("locked until"));
    assert!(msg.contains("2024-06-01"));
}

#[test]
fn test_incorrect_pin_message() {
    let err = TellerError::IncorrectPin {
        attempts_remaining: 2,
    };
    assert_eq!(err.to_string(), "Incorrect PIN: 2 attempts remaining");
}

#[test]
fn test_invalid_pin_message() {
    let err = TellerError::InvalidPin { expected: 4 };
    assert_eq!(err.to_string(), "PIN must be exactly 4 digits");
}

#[test]
fn test_daily_limit_message() {
    let err = TellerError::DailyLimitExceeded {
        currency: Currency::USD,
        attempted: 600.0,
        limit: 500.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("Daily withdrawal limit exceeded"));
    assert!(msg.contains("USD"));
    assert!(msg.contains("600"));
    assert!(msg.contains("500"));
}

#[test]
fn test_below_minimum_balance_message() {
    let err = TellerError::BelowMinimumBalance {
        would_leave: 500.0,
        floor: 1_000.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("Minimum balance requirement not met"));
    assert!(msg.contains("500"));
    assert!(msg.contains("1000"));
}

#[test]
fn test_insufficient_funds_message() {
    let err = TellerError::InsufficientFunds {
        required: 28_840.0,
        available: 28_000.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("Insufficient funds"));
    assert!(msg.contains("28840"));
    assert!(msg.contains("28000"));
}

#[test]
fn test_registry_error_messages() {
    assert_eq!(
        TellerError::UserNotFound("ghost".to_string()).to_string(),
        "User not found: ghost"
    );
    assert_eq!(
        TellerError::DuplicateUser("101".to_string()).to_string(),
        "User already registered: 101"
    );
    assert!(TellerError::AccountRequired("7".to_string())
        .to_string()
        .contains("must have an account"));
    assert_eq!(
        TellerError::AccountNotFound("admin".to_string()).to_string(),
        "No account registered for user: admin"
    );
}

#[test]
fn test_loan_error_messages() {
    assert_eq!(TellerError::NoLoans.to_string(), "No active loans");
    let err = TellerError::InvalidLoanIndex { index: 3, count: 1 };
    let msg = err.to_string();
    assert!(msg.contains("Invalid loan index 3"));
    assert!(msg.contains("1 active loans"));
}
