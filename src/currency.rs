//! Currency types and conversion into the base unit
//!
//! All balances are held in the base currency (PKR); foreign amounts are
//! converted on the way in through a fixed [`RateTable`]. The table is
//! immutable configuration built at construction, not a process-wide global.

use crate::constants::{RATE_EUR_TO_PKR, RATE_USD_TO_PKR};
use crate::error::{Result, TellerError};
use crate::types::Cash;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Currency enumeration (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Pakistani Rupee - the base unit
    PKR,
    /// US Dollar
    USD,
    /// Euro
    EUR,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::PKR => "PKR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Parse from ISO code, case-insensitive
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "PKR" => Some(Currency::PKR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }

    /// Parse from ISO code, failing with `UnsupportedCurrency`
    pub fn parse(code: &str) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| TellerError::UnsupportedCurrency(code.to_string()))
    }

    /// The base unit all balances are held in
    pub fn base() -> Self {
        Currency::PKR
    }

    /// Get all supported currencies
    pub fn all() -> Vec<Currency> {
        vec![Currency::PKR, Currency::USD, Currency::EUR]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Fixed conversion rates into the base unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    rates: HashMap<Currency, f64>,
}

impl RateTable {
    /// Build a rate table, validating that every rate is positive and that
    /// the base currency converts at exactly 1
    pub fn new(rates: HashMap<Currency, f64>) -> Result<Self> {
        for (currency, rate) in &rates {
            if *rate <= 0.0 {
                return Err(TellerError::ConfigError(format!(
                    "rate for {} must be positive, got {}",
                    currency, rate
                )));
            }
        }
        match rates.get(&Currency::base()) {
            Some(rate) if *rate == 1.0 => {}
            Some(rate) => {
                return Err(TellerError::ConfigError(format!(
                    "base currency rate must be exactly 1, got {}",
                    rate
                )));
            }
            None => {
                return Err(TellerError::ConfigError(
                    "rate table is missing the base currency".to_string(),
                ));
            }
        }
        Ok(Self { rates })
    }

    /// Rate into the base unit, `None` if the currency is not in the table
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert(Currency::PKR, 1.0);
        rates.insert(Currency::USD, RATE_USD_TO_PKR);
        rates.insert(Currency::EUR, RATE_EUR_TO_PKR);
        // Defaults are known-good, so construction cannot fail
        Self { rates }
    }
}

/// Stateless conversion of tagged amounts into the base unit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurrencyConverter {
    table: RateTable,
}

impl CurrencyConverter {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    /// Convert an amount in `currency` into base units
    pub fn to_base(&self, amount: f64, currency: Currency) -> Result<Cash> {
        let rate = self
            .table
            .rate(currency)
            .ok_or_else(|| TellerError::UnsupportedCurrency(currency.code().to_string()))?;
        Ok(amount * rate)
    }

    /// Convert from a raw currency code, the string boundary for front ends
    pub fn to_base_code(&self, amount: f64, code: &str) -> Result<Cash> {
        let currency = Currency::parse(code)?;
        self.to_base(amount, currency)
    }

    pub fn supports(&self, currency: Currency) -> bool {
        self.table.rate(currency).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("PKR"), Some(Currency::PKR));
        assert_eq!(Currency::from_code("usd"), Some(Currency::USD));
        assert_eq!(Currency::from_code("Eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("GBP"), None);
    }

    #[test]
    fn test_currency_parse_unsupported() {
        let err = Currency::parse("XYZ").unwrap_err();
        assert!(matches!(
            err,
            TellerError::UnsupportedCurrency(code) if code == "XYZ"
        ));
    }

    #[test]
    fn test_base_conversion_is_identity() {
        let converter = CurrencyConverter::default();
        assert_relative_eq!(converter.to_base(1234.5, Currency::PKR).unwrap(), 1234.5);
    }

    #[test]
    fn test_foreign_conversion() {
        let converter = CurrencyConverter::default();
        assert_relative_eq!(converter.to_base(100.0, Currency::USD).unwrap(), 28_000.0);
        assert_relative_eq!(converter.to_base(10.0, Currency::EUR).unwrap(), 3_000.0);
    }

    #[test]
    fn test_to_base_code_normalizes_case() {
        let converter = CurrencyConverter::default();
        assert_relative_eq!(converter.to_base_code(5.0, "usd").unwrap(), 1_400.0);
        assert!(converter.to_base_code(5.0, "yen").is_err());
    }

    #[test]
    fn test_rate_table_rejects_bad_base_rate() {
        let mut rates = HashMap::new();
        rates.insert(Currency::PKR, 2.0);
        assert!(RateTable::new(rates).is_err());
    }

    #[test]
    fn test_rate_table_rejects_non_positive_rate() {
        let mut rates = HashMap::new();
        rates.insert(Currency::PKR, 1.0);
        rates.insert(Currency::USD, -280.0);
        assert!(RateTable::new(rates).is_err());
    }

    #[test]
    fn test_rate_table_requires_base() {
        let mut rates = HashMap::new();
        rates.insert(Currency::USD, 280.0);
        assert!(RateTable::new(rates).is_err());
    }

    #[test]
    fn test_converter_missing_currency() {
        let mut rates = HashMap::new();
        rates.insert(Currency::PKR, 1.0);
        let converter = CurrencyConverter::new(RateTable::new(rates).unwrap());
        assert!(converter.supports(Currency::PKR));
        assert!(!converter.supports(Currency::EUR));
        assert!(matches!(
            converter.to_base(10.0, Currency::EUR),
            Err(TellerError::UnsupportedCurrency(_))
        ));
    }
}
