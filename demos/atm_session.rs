//! Scripted teller session against the seeded branch
//!
//! Seeds the same users as the production bootstrap (one admin, a savings
//! user, a current user) and walks through a typical day: deposits,
//! withdrawals, a loan lifecycle and the admin views.
//!
//! Run with: cargo run --example atm_session

use anyhow::Result;
use rusty_teller::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let today = chrono::Utc::now().date_naive();
    let mut atm = Atm::new();

    atm.add_user(User::admin("admin", "Bank Admin", "9999", today), None)?;
    atm.add_user(
        User::new("101", "Anzar", "1234", today),
        Some(Account::savings(10_000.0)),
    )?;
    atm.add_user(
        User::new("102", "Ali", "4321", today),
        Some(Account::current(20_000.0)),
    )?;

    // Anzar's session
    let user = atm.login("101", "1234")?;
    println!("Welcome {}", user.name);
    println!("Balance: PKR {}", atm.balance("101")?);

    println!("{}", atm.deposit("101", 100.0, Currency::USD)?);
    println!("{}", atm.withdraw("101", 5_000.0, Currency::PKR)?);

    match atm.withdraw("101", 50_000.0, Currency::PKR) {
        Ok(receipt) => println!("{}", receipt),
        Err(err) => println!("{}", err),
    }

    println!("{}", atm.take_loan("101", 1_000.0, Currency::PKR, LoanTerm::Years(1))?);
    for (i, loan) in atm.loans("101")?.iter().enumerate() {
        println!("{}. {}", i + 1, loan);
    }
    println!("{}", atm.pay_loan("101", 0, 500.0)?);
    println!("{}", atm.pay_loan("101", 0, 900.0)?);

    println!("\nRecent transactions:");
    for entry in atm.transactions("101")? {
        println!("{}", entry);
    }

    // A wrong PIN surfaces as an ordinary message
    if let Err(err) = atm.login("102", "0000") {
        println!("\nLogin failed: {}", err);
    }

    // Admin session
    let admin = atm.login("admin", "9999")?;
    println!("\nADMIN PANEL ({})", admin.name);
    for user in atm.users() {
        println!("{} - {}", user.user_id, user.name);
    }
    for (user_id, name, entries) in atm.all_transactions() {
        println!("\nTransactions for {} (UserID: {}):", name, user_id);
        if entries.is_empty() {
            println!("No transactions found.");
        }
        for entry in entries {
            println!("{}", entry);
        }
    }

    println!("\nLoan book snapshot:");
    println!("{}", serde_json::to_string_pretty(atm.loans("101")?)?);

    Ok(())
}
