//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues in cart totals and tax.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies. The catalog is priced in USD only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
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
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a whole-unit amount.
    ///
    /// ```
    /// use glow_commerce::money::{Currency, Money};
    /// let price = Money::from_whole(89, Currency::USD);
    /// assert_eq!(price.amount_cents, 8900);
    /// ```
    pub const fn from_whole(amount: i64, currency: Currency) -> Self {
        Self::new(amount * 100, currency)
    }

    /// Create a zero amount in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        format!("{}{}", self.currency.symbol(), self.display_amount())
    }

    /// Format without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        let cents = self.amount_cents.unsigned_abs();
        format!("{}{}.{:02}", sign, cents / 100, cents % 100)
    }

    /// Format whole amounts without cents (e.g., "$89"), as on product cards.
    pub fn display_short(&self) -> String {
        if self.amount_cents % 100 == 0 {
            format!("{}{}", self.currency.symbol(), self.amount_cents / 100)
        } else {
            self.display()
        }
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor), self.currency)
    }

    /// Take a share expressed in basis points (1/100 of a percent),
    /// rounded half-up to the cent.
    ///
    /// ```
    /// use glow_commerce::money::{Currency, Money};
    /// let subtotal = Money::new(8950, Currency::USD);
    /// assert_eq!(subtotal.basis_points(800).amount_cents, 716);
    /// ```
    pub fn basis_points(&self, bps: u32) -> Money {
        let scaled = i128::from(self.amount_cents) * i128::from(bps);
        let rounded = (scaled + 5_000).div_euclid(10_000);
        Money::new(
            i64::try_from(rounded).unwrap_or(i64::MAX),
            self.currency,
        )
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "currency mismatch in addition");
        Money::new(self.amount_cents.saturating_add(other.amount_cents), self.currency)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        debug_assert_eq!(self.currency, other.currency, "currency mismatch in subtraction");
        Money::new(self.amount_cents.saturating_sub(other.amount_cents), self.currency)
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
    fn test_money_from_whole() {
        let m = Money::from_whole(45, Currency::USD);
        assert_eq!(m.amount_cents, 4500);
        assert_eq!(m.currency, Currency::USD);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(5, Currency::USD).display(), "$0.05");
        assert_eq!(Money::new(-250, Currency::USD).display(), "$-2.50");
    }

    #[test]
    fn test_money_display_short() {
        assert_eq!(Money::from_whole(89, Currency::USD).display_short(), "$89");
        assert_eq!(Money::new(8950, Currency::USD).display_short(), "$89.50");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000, Currency::USD);
        let b = Money::new(500, Currency::USD);
        assert_eq!((a + b).amount_cents, 1500);
        assert_eq!((a - b).amount_cents, 500);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000, Currency::USD);
        assert_eq!((m * 3).amount_cents, 3000);
    }

    #[test]
    fn test_basis_points_rounding() {
        // 8% of $89.00 = $7.12
        assert_eq!(Money::from_whole(89, Currency::USD).basis_points(800).amount_cents, 712);
        // 8% of $0.06 = 0.48 cents -> 0
        assert_eq!(Money::new(6, Currency::USD).basis_points(800).amount_cents, 0);
        // 8% of $0.07 = 0.56 cents -> 1
        assert_eq!(Money::new(7, Currency::USD).basis_points(800).amount_cents, 1);
    }

    #[test]
    fn test_currency_code() {
        assert_eq!(Currency::default(), Currency::USD);
        assert_eq!(Currency::USD.to_string(), "USD");
        assert_eq!(Money::zero(Currency::USD).display(), "$0.00");
    }
}
