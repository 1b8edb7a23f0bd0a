//! Type-safe unit price using decimal arithmetic.
//!
//! Prices are plain non-negative amounts in the currency's displayed unit
//! (e.g. `7990` for "7 990 ₽"). Currency symbols and formatting are not
//! modelled; only numeric parsing of displayed money text is.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`] strictly.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The input is not a decimal number.
    #[error("price is not a number: {0:?}")]
    NotANumber(String),
}

/// A non-negative unit price.
///
/// Serialized as a JSON number so the persisted cart stays readable by any
/// consumer of the storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// The zero price, used wherever an amount cannot be determined.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount < 0`.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount.normalize()))
    }

    /// Parse displayed money text such as `"7 990 ₽"` or `"19,99 €"`.
    ///
    /// Everything except ASCII digits, `.` and `,` is dropped, then the first
    /// `,` is read as the decimal point. Text that still isn't a number
    /// (including empty text) yields [`Price::ZERO`].
    ///
    /// ```
    /// use stableshop_core::Price;
    ///
    /// assert_eq!(Price::parse_lenient("7 990 ₽").to_string(), "7990");
    /// assert_eq!(Price::parse_lenient("19,99 €").to_string(), "19.99");
    /// assert_eq!(Price::parse_lenient("call us"), Price::ZERO);
    /// ```
    #[must_use]
    pub fn parse_lenient(text: &str) -> Self {
        let kept: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
            .collect();
        let normalized = kept.replacen(',', ".", 1);
        if normalized.is_empty() {
            return Self::ZERO;
        }
        Decimal::from_str(&normalized).map_or(Self::ZERO, |amount| Self(amount.normalize()))
    }

    /// Interpret a JSON number, clamping negatives to zero.
    #[must_use]
    pub fn from_json_number(number: &serde_json::Number) -> Self {
        let text = number.to_string();
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
            .and_then(|amount| Self::new(amount).ok())
            .unwrap_or(Self::ZERO)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|_| PriceError::NotANumber(s.to_owned()))?;
        Self::new(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Price {
    /// Written as a JSON number carrying the exact decimal digits.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = serde_json::Number::from_str(&self.0.to_string())
            .map_err(serde::ser::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    /// Accepts a JSON number or a money string; anything else is an error.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Number(number) => Ok(Self::from_json_number(&number)),
            serde_json::Value::String(text) => Ok(Self::parse_lenient(&text)),
            other => Err(serde::de::Error::custom(format!(
                "expected a price, got {other}"
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient_strips_symbols_and_spaces() {
        assert_eq!(Price::parse_lenient("7 990 ₽").amount(), Decimal::new(7990, 0));
        assert_eq!(Price::parse_lenient("$12.50").amount(), Decimal::new(125, 1));
    }

    #[test]
    fn test_parse_lenient_comma_decimal() {
        assert_eq!(Price::parse_lenient("19,99").amount(), Decimal::new(1999, 2));
    }

    #[test]
    fn test_parse_lenient_unparsable_is_zero() {
        assert_eq!(Price::parse_lenient(""), Price::ZERO);
        assert_eq!(Price::parse_lenient("free"), Price::ZERO);
        // Only the first comma is treated as a decimal point.
        assert_eq!(Price::parse_lenient("1.234,50"), Price::ZERO);
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 0)),
            Err(PriceError::Negative(_))
        ));
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_from_str_strict() {
        assert_eq!("7990".parse::<Price>().unwrap().to_string(), "7990");
        assert!(matches!(
            "seven".parse::<Price>(),
            Err(PriceError::NotANumber(_))
        ));
    }

    #[test]
    fn test_serializes_integer_as_integer() {
        let price = Price::parse_lenient("7990");
        assert_eq!(serde_json::to_string(&price).unwrap(), "7990");
    }

    #[test]
    fn test_serde_roundtrip_fractional() {
        let price = Price::parse_lenient("79.9");
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "79.9");
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_serde_roundtrip_beyond_f64_precision() {
        for text in [
            "0.1234567890123456789",
            "12345678901234567.89",
            "123456789012345678901234",
        ] {
            let price = Price::parse_lenient(text);
            let json = serde_json::to_string(&price).unwrap();
            assert_eq!(json, text);
            let parsed: Price = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, price);
            assert_eq!(parsed.to_string(), text);
        }
    }

    #[test]
    fn test_deserialize_negative_number_clamps_to_zero() {
        let parsed: Price = serde_json::from_str("-5").unwrap();
        assert_eq!(parsed, Price::ZERO);
    }

    #[test]
    fn test_deserialize_rejects_non_price() {
        assert!(serde_json::from_str::<Price>("true").is_err());
    }
}
