//! Account ledger - deposits, withdrawals and the loan collection
//!
//! Balances are always held in base units; every operation converts its
//! tagged amount on the way in. The two account kinds share all deposit and
//! loan logic and differ only in the floor a withdrawal must respect. Every
//! mutation happens after the full validation chain for that operation has
//! passed, so a failed operation leaves the account (and the acting user's
//! counters) untouched.

use crate::config::TellerConfig;
use crate::constants::RECENT_TRANSACTIONS;
use crate::currency::Currency;
use crate::error::{Result, TellerError};
use crate::loan::{Loan, LoanTerm};
use crate::types::{Cash, LoanId, Timestamp};
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account variant, differing only in withdrawal floor policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountKind {
    /// Must retain a minimum balance after any withdrawal
    Savings,
    /// May be drawn down to zero
    Current,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Savings => "Savings",
            AccountKind::Current => "Current",
        }
    }

    /// Minimum base-unit balance that must remain after a withdrawal
    fn withdrawal_floor(&self, savings_floor: Cash) -> Cash {
        match self {
            AccountKind::Savings => savings_floor,
            AccountKind::Current => 0.0,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One timestamped entry in the append-only transaction log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: Timestamp,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.timestamp, self.message)
    }
}

/// Outcome of a successful deposit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepositReceipt {
    pub amount: f64,
    pub currency: Currency,
    /// Base units credited to the balance
    pub credited: Cash,
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deposit successful. PKR {} added.", self.credited)
    }
}

/// Outcome of a successful withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawalReceipt {
    pub amount: f64,
    pub currency: Currency,
    /// Base units deducted from the balance
    pub debited: Cash,
}

impl fmt::Display for WithdrawalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Withdrawal successful. PKR {} deducted.", self.debited)
    }
}

/// Outcome of a granted loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanReceipt {
    pub loan_id: LoanId,
    pub principal: f64,
    pub currency: Currency,
    pub term: LoanTerm,
    /// Base units credited to the balance
    pub credited: Cash,
    /// Total interest over the term, in base units
    pub interest: Cash,
}

impl fmt::Display for LoanReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loan granted! PKR {} added. Interest: PKR {:.2}",
            self.credited, self.interest
        )
    }
}

/// Outcome of a loan payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub loan_id: LoanId,
    /// Amount applied to the loan after clamping, in the loan's currency
    pub applied: f64,
    pub currency: Currency,
    /// Base units deducted from the balance
    pub debited: Cash,
    pub remaining: f64,
    /// Whether this payment closed the loan
    pub closed: bool,
}

impl fmt::Display for PaymentReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payment successful. Remaining loan: {:.2} {}",
            self.remaining, self.currency
        )?;
        if self.closed {
            write!(f, " Loan fully paid!")?;
        }
        Ok(())
    }
}

/// Balance ledger, transaction log and active loans for one identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    kind: AccountKind,
    /// Base-currency balance
    balance: Cash,
    transactions: Vec<LogEntry>,
    loans: Vec<Loan>,
}

impl Account {
    pub fn new(kind: AccountKind, opening_balance: Cash) -> Self {
        Self {
            kind,
            balance: opening_balance,
            transactions: Vec::new(),
            loans: Vec::new(),
        }
    }

    pub fn savings(opening_balance: Cash) -> Self {
        Self::new(AccountKind::Savings, opening_balance)
    }

    pub fn current(opening_balance: Cash) -> Self {
        Self::new(AccountKind::Current, opening_balance)
    }

    pub fn kind(&self) -> AccountKind {
        self.kind
    }

    /// Current balance in base units
    pub fn balance(&self) -> Cash {
        self.balance
    }

    /// Active loans, oldest first
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    /// Full transaction log, oldest first
    pub fn transactions(&self) -> &[LogEntry] {
        &self.transactions
    }

    /// The most recent log entries, oldest of the window first
    pub fn recent_transactions(&self) -> &[LogEntry] {
        let start = self.transactions.len().saturating_sub(RECENT_TRANSACTIONS);
        &self.transactions[start..]
    }

    fn log(&mut self, now: Timestamp, message: String) {
        self.transactions.push(LogEntry {
            timestamp: now,
            message,
        });
    }

    /// Credit a tagged amount to the balance
    pub fn deposit(
        &mut self,
        amount: f64,
        currency: Currency,
        config: &TellerConfig,
        now: Timestamp,
    ) -> Result<DepositReceipt> {
        if amount <= 0.0 {
            return Err(TellerError::NonPositiveAmount(amount));
        }
        let credited = config.converter.to_base(amount, currency)?;

        self.balance += credited;
        self.log(
            now,
            format!("Deposited {} {} (PKR {})", amount, currency, credited),
        );
        log::debug!("deposit of {} {} credited PKR {}", amount, currency, credited);

        Ok(DepositReceipt {
            amount,
            currency,
            credited,
        })
    }

    /// Debit a tagged amount, enforcing the acting user's daily limit and the
    /// variant's floor policy
    ///
    /// The user's counter accumulates the original pre-conversion amount in
    /// the withdrawal currency, while the balance moves by the converted
    /// base amount.
    pub fn withdraw(
        &mut self,
        amount: f64,
        currency: Currency,
        user: &mut User,
        config: &TellerConfig,
        now: Timestamp,
    ) -> Result<WithdrawalReceipt> {
        if amount <= 0.0 {
            return Err(TellerError::NonPositiveAmount(amount));
        }
        let debited = config.converter.to_base(amount, currency)?;

        user.reset_daily_withdrawals(now.date_naive());
        if let Some(limit) = config.daily_limits.limit(currency) {
            let attempted = user.daily_withdrawn(currency) + amount;
            if attempted > limit {
                return Err(TellerError::DailyLimitExceeded {
                    currency,
                    attempted,
                    limit,
                });
            }
        }

        let floor = self.kind.withdrawal_floor(config.savings_floor);
        if self.balance - debited < floor {
            return Err(match self.kind {
                AccountKind::Savings => TellerError::BelowMinimumBalance {
                    would_leave: self.balance - debited,
                    floor,
                },
                AccountKind::Current => TellerError::InsufficientFunds {
                    required: debited,
                    available: self.balance,
                },
            });
        }

        self.balance -= debited;
        user.record_withdrawal(currency, amount);
        self.log(
            now,
            format!("Withdrew {} {} (PKR {})", amount, currency, debited),
        );
        log::debug!("withdrawal of {} {} debited PKR {}", amount, currency, debited);

        Ok(WithdrawalReceipt {
            amount,
            currency,
            debited,
        })
    }

    /// Grant a loan: append it to the collection and credit the converted
    /// principal immediately
    pub fn take_loan(
        &mut self,
        principal: f64,
        currency: Currency,
        term: LoanTerm,
        config: &TellerConfig,
        now: Timestamp,
    ) -> Result<LoanReceipt> {
        if principal <= 0.0 {
            return Err(TellerError::NonPositiveAmount(principal));
        }
        if !term.is_positive() {
            return Err(TellerError::NonPositiveDuration);
        }
        let credited = config.converter.to_base(principal, currency)?;
        let years = term.as_years();
        let interest = credited * config.loan_interest_rate * years;

        let loan = Loan::new(
            principal,
            currency,
            years,
            now.date_naive(),
            config.loan_interest_rate,
        );
        let loan_id = loan.id;
        self.loans.push(loan);
        self.balance += credited;
        self.log(
            now,
            format!(
                "Loan taken: {} {} (PKR {}), Duration: {}, Interest: PKR {:.2}",
                principal, currency, credited, term, interest
            ),
        );
        log::info!(
            "loan {} granted: {} {} over {}",
            loan_id,
            principal,
            currency,
            term
        );

        Ok(LoanReceipt {
            loan_id,
            principal,
            currency,
            term,
            credited,
            interest,
        })
    }

    /// Pay down the loan at `index` (zero-based, oldest first)
    ///
    /// The payment is clamped to the loan's remaining amount before the
    /// balance check, and the log records the amount actually applied. A
    /// fully paid loan is removed from the collection.
    pub fn pay_loan(
        &mut self,
        index: usize,
        amount: f64,
        config: &TellerConfig,
        now: Timestamp,
    ) -> Result<PaymentReceipt> {
        if self.loans.is_empty() {
            return Err(TellerError::NoLoans);
        }
        if index >= self.loans.len() {
            return Err(TellerError::InvalidLoanIndex {
                index,
                count: self.loans.len(),
            });
        }
        if amount <= 0.0 {
            return Err(TellerError::NonPositiveAmount(amount));
        }

        let (loan_id, currency, applied) = {
            let loan = &self.loans[index];
            (loan.id, loan.currency, amount.min(loan.remaining_amount))
        };
        let debited = config.converter.to_base(applied, currency)?;
        if debited > self.balance {
            return Err(TellerError::InsufficientFunds {
                required: debited,
                available: self.balance,
            });
        }

        self.balance -= debited;
        let applied = self.loans[index].pay(applied);
        let remaining = self.loans[index].remaining_amount;
        let closed = self.loans[index].is_paid_off();
        self.log(
            now,
            format!("Loan payment: {} {} (PKR {})", applied, currency, debited),
        );
        if closed {
            self.loans.remove(index);
            log::info!("loan {} fully paid and closed", loan_id);
        }

        Ok(PaymentReceipt {
            loan_id,
            applied,
            currency,
            debited,
            remaining,
            closed,
        })
    }
}
