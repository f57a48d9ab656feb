//! Amount type for entry values
//!
//! Entry amounts are strictly positive floating-point values. Whether money
//! flows in or out is carried by the entry kind, never by the sign.

use serde::Serialize;
use std::fmt;

/// Currency symbol used when no settings are supplied
pub const DEFAULT_CURRENCY_SYMBOL: &str = "R$";

/// A strictly positive, finite monetary amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting zero, negatives, NaN and infinities
    ///
    /// # Examples
    /// ```
    /// use pocketbook::models::Amount;
    /// assert!(Amount::new(10.5).is_ok());
    /// assert!(Amount::new(0.0).is_err());
    /// ```
    pub fn new(value: f64) -> Result<Self, AmountError> {
        if value.is_nan() || value.is_infinite() {
            return Err(AmountError::NotFinite);
        }
        if value <= 0.0 {
            return Err(AmountError::NotPositive(value));
        }
        Ok(Self(value))
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Format with a currency symbol, e.g. `R$ 10.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{} {:.2}", symbol, self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Error type for amount construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmountError {
    NotPositive(f64),
    NotFinite,
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive(v) => write!(f, "Amount must be greater than 0 (got {})", v),
            Self::NotFinite => write!(f, "Amount must be a finite number"),
        }
    }
}

impl std::error::Error for AmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(Amount::new(0.0), Err(AmountError::NotPositive(0.0)));
        assert_eq!(Amount::new(-5.0), Err(AmountError::NotPositive(-5.0)));
        assert!(Amount::new(0.01).is_ok());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(Amount::new(f64::NAN), Err(AmountError::NotFinite));
        assert_eq!(Amount::new(f64::INFINITY), Err(AmountError::NotFinite));
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(10.5).unwrap().to_string(), "10.50");
        assert_eq!(Amount::new(3.0).unwrap().to_string(), "3.00");
        assert_eq!(
            Amount::new(1234.567).unwrap().format_with_symbol("R$"),
            "R$ 1234.57"
        );
    }
}
