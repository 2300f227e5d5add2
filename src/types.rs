//! Core type aliases shared across the crate

use chrono::{DateTime, Utc};

/// Timestamp type used throughout the library
pub type Timestamp = DateTime<Utc>;

/// Money type, always denominated in base-currency units unless noted
pub type Cash = f64;

/// Identity key for users (and their accounts)
pub type UserId = String;

/// Unique identifier for loans
pub type LoanId = uuid::Uuid;
