//! Money type for representing currency amounts
//!
//! Amounts are stored as integer cents (i64) so that aggregation over large
//! transaction sets conserves totals exactly. Ratios (percentages, budget
//! progress) convert to f64 only at the edge, via [`Money::to_major_units`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use thiserror::Error;

/// A monetary amount in cents (hundredths of the currency unit)
///
/// Transaction amounts are non-negative magnitudes; signed values appear only
/// in derived metrics such as monthly savings, which may legitimately be
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create an amount from cents
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The amount in major currency units, for ratio math
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is strictly positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is strictly negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// The absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a money amount from a string
    ///
    /// Accepts plain decimals ("10.50", "-10.50", "10"), a leading currency
    /// symbol ("$10.50"), and thousands separators ("2,000.00"). Fractions
    /// beyond two digits are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| *c != '$' && *c != ',')
            .collect();

        let (negative, digits) = match cleaned.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, cleaned.as_str()),
        };

        // Any sign past the leading position (e.g. "--5") is malformed.
        if digits.is_empty() || digits.contains('-') {
            return Err(MoneyParseError::InvalidFormat(s.trim().to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(s.trim().to_string());

        // Checked arithmetic throughout: an amount too large for i64 cents
        // is a parse error, never a panic.
        let cents = match digits.split_once('.') {
            None => digits
                .parse::<i64>()
                .ok()
                .and_then(|n| n.checked_mul(100))
                .ok_or_else(invalid)?,
            Some((whole, frac)) => {
                let whole: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().map_err(|_| invalid())?
                };
                let frac_cents: i64 = match frac.len() {
                    0 => 0,
                    1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                    _ => frac
                        .get(..2)
                        .ok_or_else(invalid)?
                        .parse()
                        .map_err(|_| invalid())?,
                };
                whole
                    .checked_mul(100)
                    .and_then(|w| w.checked_add(frac_cents))
                    .ok_or_else(invalid)?
            }
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with an explicit currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let cents = self.0.abs();
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, cents / 100, cents % 100)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        Self(self.0 * factor)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("Invalid money format: {0}")]
    InvalidFormat(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cents_accessors() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert!((m.to_major_units() - 10.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::from_cents(0).to_string(), "$0.00");
        assert_eq!(Money::from_cents(-1050).to_string(), "-$10.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!((b * 12).cents(), 6000);
    }

    #[test]
    fn test_parse_plain() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
    }

    #[test]
    fn test_parse_currency_markup() {
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$2,000.00").unwrap().cents(), 200_000);
        assert_eq!(Money::parse(" 150.00 ").unwrap().cents(), 15_000);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("$").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("10.5.5").is_err());
    }

    #[test]
    fn test_parse_overflow_is_error_not_panic() {
        // Would overflow i64 cents when scaled by 100.
        assert!(Money::parse("922337203685477580").is_err());
        assert!(Money::parse("922337203685477580.00").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_doubled_sign_rejected() {
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("-$-5").is_err());
        assert!(Money::parse("5-0").is_err());
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].iter().map(|c| Money::from_cents(*c)).sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
