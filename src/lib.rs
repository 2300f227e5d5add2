//! # Rusty Teller
//!
//! An in-memory domain model for a single-branch automated teller:
//! multi-currency accounts, PIN authentication with lockout, and
//! interest-bearing loans. Front ends (text menus, form screens) call into
//! this core and render the returned receipts and error messages; the core
//! itself never does I/O and never panics on expected failures.
//!
//! ## Example
//!
//! ```rust
//! use rusty_teller::prelude::*;
//!
//! let today = chrono::Utc::now().date_naive();
//! let mut atm = Atm::new();
//! atm.add_user(
//!     User::new("101", "Anzar", "1234", today),
//!     Some(Account::savings(10_000.0)),
//! )
//! .unwrap();
//!
//! atm.login("101", "1234").unwrap();
//! let receipt = atm.deposit("101", 100.0, Currency::USD).unwrap();
//! assert_eq!(receipt.credited, 28_000.0);
//! ```

pub mod account;
pub mod atm;
pub mod clock;
pub mod config;
pub mod constants;
pub mod currency;
pub mod error;
pub mod loan;
pub mod types;
pub mod user;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::account::{Account, AccountKind, LogEntry};
    pub use crate::atm::Atm;
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::config::{DailyLimits, LockoutPolicy, TellerConfig};
    pub use crate::currency::{Currency, CurrencyConverter, RateTable};
    pub use crate::error::{Result, TellerError};
    pub use crate::loan::{Loan, LoanTerm};
    pub use crate::types::*;
    pub use crate::user::User;
}
