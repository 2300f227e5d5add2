//! Loan records with a fixed-rate amortized remaining balance
//!
//! A loan's remaining amount is fixed at creation as
//! `principal * (1 + rate * years)` and only ever decreases through payments.
//! The owning account removes the loan once the remaining amount hits zero.

use crate::constants::{MONTHS_PER_YEAR, ZERO_TOLERANCE};
use crate::currency::Currency;
use crate::types::LoanId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Requested loan duration, normalized to fractional years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanTerm {
    Months(u32),
    Years(u32),
}

impl LoanTerm {
    pub fn as_years(&self) -> f64 {
        match self {
            LoanTerm::Months(months) => *months as f64 / MONTHS_PER_YEAR,
            LoanTerm::Years(years) => *years as f64,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            LoanTerm::Months(n) | LoanTerm::Years(n) => *n > 0,
        }
    }
}

impl fmt::Display for LoanTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoanTerm::Months(n) => write!(f, "{} months", n),
            LoanTerm::Years(n) => write!(f, "{} years", n),
        }
    }
}

/// A single loan owned by one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    /// Borrowed amount in the loan's own currency
    pub principal: f64,
    pub currency: Currency,
    pub duration_years: f64,
    pub start_date: NaiveDate,
    /// Fixed annual rate
    pub interest_rate: f64,
    /// What is still owed, in the loan's own currency
    pub remaining_amount: f64,
}

impl Loan {
    pub fn new(
        principal: f64,
        currency: Currency,
        duration_years: f64,
        start_date: NaiveDate,
        interest_rate: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            principal,
            currency,
            duration_years,
            start_date,
            interest_rate,
            remaining_amount: principal * (1.0 + interest_rate * duration_years),
        }
    }

    /// Apply a payment, clamped to the remaining balance
    ///
    /// Returns the amount actually applied; overpayment reduces to an exact
    /// payoff with the excess never charged.
    pub fn pay(&mut self, amount: f64) -> f64 {
        let applied = amount.min(self.remaining_amount);
        self.remaining_amount -= applied;
        applied
    }

    /// Whether the loan is fully paid and ready for removal
    pub fn is_paid_off(&self) -> bool {
        self.remaining_amount <= ZERO_TOLERANCE
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loan: {} {}, Duration: {:.2} years, Remaining: {:.2} {}",
            self.principal, self.currency, self.duration_years, self.remaining_amount, self.currency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_term_as_years() {
        assert_relative_eq!(LoanTerm::Months(6).as_years(), 0.5);
        assert_relative_eq!(LoanTerm::Months(18).as_years(), 1.5);
        assert_relative_eq!(LoanTerm::Years(2).as_years(), 2.0);
        assert!(!LoanTerm::Months(0).is_positive());
        assert!(LoanTerm::Years(1).is_positive());
    }

    #[test]
    fn test_remaining_includes_interest() {
        let loan = Loan::new(1_000.0, Currency::PKR, 1.0, start(), 0.03);
        assert_relative_eq!(loan.remaining_amount, 1_030.0);

        let half_year = Loan::new(2_000.0, Currency::USD, 0.5, start(), 0.03);
        assert_relative_eq!(half_year.remaining_amount, 2_030.0, epsilon = 1e-9);
    }

    #[test]
    fn test_successive_payments() {
        let mut loan = Loan::new(1_000.0, Currency::PKR, 1.0, start(), 0.03);
        for _ in 0..3 {
            assert_relative_eq!(loan.pay(100.0), 100.0);
        }
        assert_relative_eq!(loan.remaining_amount, 730.0);
        assert!(!loan.is_paid_off());
    }

    #[test]
    fn test_overpayment_clamps() {
        let mut loan = Loan::new(1_000.0, Currency::PKR, 1.0, start(), 0.03);
        let applied = loan.pay(5_000.0);
        assert_relative_eq!(applied, 1_030.0);
        assert_relative_eq!(loan.remaining_amount, 0.0);
        assert!(loan.is_paid_off());
    }

    #[test]
    fn test_display() {
        let loan = Loan::new(500.0, Currency::USD, 0.5, start(), 0.03);
        let text = loan.to_string();
        assert!(text.contains("500 USD"));
        assert!(text.contains("0.50 years"));
        assert!(text.contains("507.50 USD"));
    }
}
