//! Monetary amounts as whole cents.

use serde::{Serialize, Serializer};
use std::fmt;

/// Non-negative amount stored in cents so comparisons are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Parse a decimal string such as `"19.99"`.
    ///
    /// Returns `None` for empty, non-numeric, non-finite or negative input. Extra
    /// precision is rounded to the nearest cent.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let amount: f64 = trimmed.parse().ok()?;
        if !amount.is_finite() || amount < 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let cents = (amount * 100.0).round() as u64;
        Some(Self { cents })
    }

    pub const fn cents(&self) -> u64 {
        self.cents
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        assert_eq!(Money::parse("19.99").map(|m| m.to_string()), Some("19.99".to_string()));
        assert_eq!(Money::parse("5").map(|m| m.to_string()), Some("5.00".to_string()));
        assert_eq!(Money::parse(" 0.5 ").map(|m| m.cents()), Some(50));
        assert_eq!(Money::parse("10.006").map(|m| m.cents()), Some(1001));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("abc"), None);
        assert_eq!(Money::parse("-1"), None);
        assert_eq!(Money::parse("NaN"), None);
        assert_eq!(Money::parse("inf"), None);
    }

    #[test]
    fn test_serializes_as_fixed_point_string() {
        let json = serde_json::to_string(&Money::from_cents(1250)).unwrap();
        assert_eq!(json, "\"12.50\"");
    }
}
