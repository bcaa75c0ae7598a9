//! Money type for representing monetary values.
//!
//! Uses minor-unit integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The dealership
//! trades in CFA francs, which have no minor unit, so for the default
//! currency the stored amount equals the face amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Central African CFA franc (FCFA).
    #[default]
    XAF,
    /// West African CFA franc.
    XOF,
    /// Nigerian naira.
    NGN,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "XAF").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::XAF => "XAF",
            Currency::XOF => "XOF",
            Currency::NGN => "NGN",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "FCFA").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::XAF => "FCFA",
            Currency::XOF => "FCFA",
            Currency::NGN => "\u{20a6}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Whether the symbol follows the amount ("1500 FCFA" vs "$15.00").
    pub fn symbol_is_suffix(&self) -> bool {
        matches!(self, Currency::XAF | Currency::XOF)
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::XAF | Currency::XOF => 0,
            _ => 2,
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "XAF" => Some(Currency::XAF),
            "XOF" => Some(Currency::XOF),
            "NGN" => Some(Currency::NGN),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (whole francs
/// for XAF/XOF, cents for USD/EUR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use showroom_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(500_000.0, Currency::XAF);
    /// assert_eq!(price.amount_minor, 500_000);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_minor = (amount * multiplier as f64).round() as i64;
        Self::new(amount_minor, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_minor == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_minor > 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_minor < 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_minor as f64 / divisor as f64
    }

    /// Format as a display string (e.g., "500000 FCFA").
    pub fn display(&self) -> String {
        let amount = self.display_amount();
        if self.currency.symbol_is_suffix() {
            format!("{} {}", amount, self.currency.symbol())
        } else {
            format!("{}{}", self.currency.symbol(), amount)
        }
    }

    /// Format the bare amount without symbol (e.g., "500000").
    pub fn display_amount(&self) -> String {
        let decimal = self.to_decimal();
        let places = self.currency.decimal_places() as usize;
        format!("{:.places$}", decimal)
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match or the sum overflows. Use
    /// `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Try to add another Money value, returning None on currency
    /// mismatch or overflow.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_add(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match or the difference overflows.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        let amount = self.amount_minor.checked_sub(other.amount_minor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Multiply by a scalar.
    ///
    /// # Panics
    /// Panics if the product overflows.
    pub fn multiply(&self, factor: i64) -> Money {
        self.try_multiply(factor)
            .expect("Overflow in money multiplication")
    }

    /// Try to multiply by a scalar, returning None on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        let amount = self.amount_minor.checked_mul(factor)?;
        Some(Money::new(amount, self.currency))
    }

    /// Try to sum an iterator of Money values, returning None on
    /// currency mismatch or overflow.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor_units() {
        let m = Money::new(500_000, Currency::XAF);
        assert_eq!(m.amount_minor, 500_000);
        assert_eq!(m.currency, Currency::XAF);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_minor, 4999);

        // XAF has no minor unit
        let m = Money::from_decimal(10_000_000.0, Currency::XAF);
        assert_eq!(m.amount_minor, 10_000_000);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(500_000, Currency::XAF);
        assert_eq!(m.display(), "500000 FCFA");

        let m = Money::new(4999, Currency::USD);
        assert_eq!(m.display(), "$49.99");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(10_000_000, Currency::XAF);
        let b = Money::new(500_000, Currency::XAF);
        let c = a + b;
        assert_eq!(c.amount_minor, 10_500_000);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(1000, Currency::XAF);
        let b = Money::new(300, Currency::XAF);
        assert_eq!(a.subtract(&b).amount_minor, 700);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(10_500_000, Currency::XAF);
        assert_eq!(m.multiply(3).amount_minor, 31_500_000);
    }

    #[test]
    fn test_money_try_sum() {
        let values = vec![
            Money::new(100, Currency::XAF),
            Money::new(200, Currency::XAF),
            Money::new(300, Currency::XAF),
        ];
        let sum = Money::try_sum(values.iter(), Currency::XAF).unwrap();
        assert_eq!(sum.amount_minor, 600);
    }

    #[test]
    fn test_money_overflow_detected() {
        let m = Money::new(i64::MAX, Currency::XAF);
        assert!(m.try_add(&Money::new(1, Currency::XAF)).is_none());
        assert!(m.try_multiply(2).is_none());
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let xaf = Money::new(1000, Currency::XAF);
        let eur = Money::new(1000, Currency::EUR);
        let _ = xaf + eur;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("XAF"), Some(Currency::XAF));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("INVALID"), None);
    }
}
