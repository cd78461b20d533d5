//! Exact currency values.
//!
//! Amounts are stored as whole cents so that parsing, multiplying, and
//! formatting never pass through floating point. Negative amounts are
//! not representable.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DiceError;

/// The paycheque used when the caller supplies none: $2500.00.
pub const DEFAULT_BASE_AMOUNT: Money = Money::from_cents(250_000);

/// A non-negative currency amount in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// An amount from a cent count.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// The amount in whole cents.
    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl FromStr for Money {
    type Err = DiceError;

    /// Parse a decimal amount like `2500`, `2500.5`, or `$2500.00`.
    ///
    /// At most 2 fraction digits are accepted; anything else (including
    /// negative or non-numeric input) is an [`DiceError::InvalidAmount`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DiceError::InvalidAmount(s.to_string());

        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);

        let (units_part, frac_part) = match trimmed.split_once('.') {
            Some((units, frac)) => (units, Some(frac)),
            None => (trimmed, None),
        };

        if units_part.is_empty() || !units_part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let units: u64 = units_part.parse().map_err(|_| invalid())?;

        let frac_cents = match frac_part {
            None => 0,
            Some(frac) => {
                if frac.is_empty() || frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                let digits: u64 = frac.parse().map_err(|_| invalid())?;
                // "5" means 50 cents, "05" means 5 cents
                if frac.len() == 1 { digits * 10 } else { digits }
            }
        };

        units
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .map(Money)
            .ok_or_else(invalid)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn parse_whole_amount() {
        assert_eq!(parse("2500"), Money::from_cents(250_000));
    }

    #[test]
    fn parse_two_fraction_digits() {
        assert_eq!(parse("2500.75"), Money::from_cents(250_075));
        assert_eq!(parse("0.01"), Money::from_cents(1));
    }

    #[test]
    fn parse_one_fraction_digit_is_tens_of_cents() {
        assert_eq!(parse("2500.5"), Money::from_cents(250_050));
    }

    #[test]
    fn parse_dollar_prefix_and_whitespace() {
        assert_eq!(parse(" $19.99 "), Money::from_cents(1999));
    }

    #[test]
    fn parse_zero() {
        assert_eq!(parse("0"), Money::from_cents(0));
        assert_eq!(parse("0.00"), Money::from_cents(0));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "abc", "-5", "1.234", "1.", ".50", "12a", "1,000", "NaN"] {
            assert!(
                bad.parse::<Money>().is_err(),
                "'{bad}' should not parse as money"
            );
        }
    }

    #[test]
    fn rejects_overflow() {
        assert!("184467440737095517".parse::<Money>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Money::from_cents(250_000).to_string(), "$2500.00");
        assert_eq!(Money::from_cents(250).to_string(), "$2.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn default_base_amount() {
        assert_eq!(DEFAULT_BASE_AMOUNT.to_string(), "$2500.00");
    }
}
