/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Core value types for BR Code payloads.
//!
//! This module provides [`Amount`], the fixed-point transaction amount used
//! by the amount field (tag 54). Amounts render with exactly two fractional
//! digits, `.` as separator and no grouping, as the payload format requires.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed-point transaction amount.
///
/// The encoded form always carries two fractional digits with half-up
/// rounding: `10` renders as `10.00`, `10.005` as `10.01`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount from a decimal value.
    #[inline]
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Coerces arbitrary text into an amount.
    ///
    /// This is a total function: it parses the longest leading numeric
    /// prefix (optional sign, integer digits, optional fractional part) and
    /// falls back to zero when no digits are present. `"12.3abc"` coerces
    /// to `12.3`, `"abc"` to `0`.
    ///
    /// # Arguments
    /// * `text` - The raw amount text
    #[must_use]
    pub fn coerce(text: &str) -> Self {
        match numeric_prefix(text) {
            Some(prefix) => Self(Decimal::from_str(&prefix).unwrap_or(Decimal::ZERO)),
            None => Self(Decimal::ZERO),
        }
    }

    /// Returns the raw decimal value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "{:.2}", rounded)
    }
}

/// Extracts the longest leading numeric prefix of `text`, normalized to a
/// form the decimal parser accepts (a bare `.5` becomes `0.5`). Returns
/// `None` when the text carries no leading digits at all.
fn numeric_prefix(text: &str) -> Option<String> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut i = 0;

    let mut out = String::new();
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        if bytes[i] == b'-' {
            out.push('-');
        }
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let has_int = i > int_start;
    if has_int {
        out.push_str(&s[int_start..i]);
    } else {
        out.push('0');
    }

    let mut has_frac = false;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            has_frac = true;
            out.push('.');
            out.push_str(&s[frac_start..j]);
        }
    }

    if has_int || has_frac { Some(out) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_two_decimal_rendering() {
        assert_eq!(Amount::coerce("10").to_string(), "10.00");
        assert_eq!(Amount::coerce("10.0").to_string(), "10.00");
        assert_eq!(Amount::coerce("10.005").to_string(), "10.01");
    }

    #[test]
    fn test_amount_half_up_rounding() {
        assert_eq!(Amount::coerce("1.994").to_string(), "1.99");
        assert_eq!(Amount::coerce("1.995").to_string(), "2.00");
        assert_eq!(Amount::coerce("0.004").to_string(), "0.00");
    }

    #[test]
    fn test_amount_coerce_is_total() {
        assert_eq!(Amount::coerce("").to_string(), "0.00");
        assert_eq!(Amount::coerce("abc").to_string(), "0.00");
        assert_eq!(Amount::coerce("12.3abc").to_string(), "12.30");
        assert_eq!(Amount::coerce(".5").to_string(), "0.50");
        assert_eq!(Amount::coerce("  7").to_string(), "7.00");
        assert_eq!(Amount::coerce("1.2.3").to_string(), "1.20");
    }

    #[test]
    fn test_amount_from_decimal() {
        let amount = Amount::from(Decimal::new(1050, 2));
        assert_eq!(amount.to_string(), "10.50");
        assert_eq!(Decimal::from(amount), Decimal::new(1050, 2));
    }
}
