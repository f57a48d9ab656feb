//! Entry status
//!
//! Status is accepted from free-form text (any case, surrounding whitespace)
//! and stored in canonical form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle flag of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryStatus {
    /// Not yet settled
    #[default]
    Pending,
    /// Settled
    Paid,
}

impl EntryStatus {
    /// Parse a free-form status token
    ///
    /// The input is trimmed and uppercased first. `PENDING`/`PAID` are the
    /// canonical tokens; `PENDENTE`/`PAGO` are accepted as aliases.
    pub fn parse(s: &str) -> Result<Self, StatusParseError> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" | "PENDENTE" => Ok(Self::Pending),
            "PAID" | "PAGO" => Ok(Self::Paid),
            _ => Err(StatusParseError::Unknown(s.to_string())),
        }
    }

    /// Canonical token for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
        }
    }
}

impl FromStr for EntryStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for status parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusParseError {
    Unknown(String),
}

impl fmt::Display for StatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(s) => write!(
                f,
                "Invalid status '{}'. Choose between: PENDING, PAID",
                s
            ),
        }
    }
}

impl std::error::Error for StatusParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        for token in [" paid ", "PAID", "Paid", "\tpaid\n", "pago"] {
            assert_eq!(EntryStatus::parse(token), Ok(EntryStatus::Paid), "{token:?}");
        }
        for token in ["pending", " PENDING", "Pendente "] {
            assert_eq!(EntryStatus::parse(token), Ok(EntryStatus::Pending), "{token:?}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for token in ["", "   ", "done", "paid!", "p a i d", "cleared"] {
            assert!(EntryStatus::parse(token).is_err(), "{token:?}");
        }
    }

    #[test]
    fn test_display_is_canonical() {
        assert_eq!(EntryStatus::Paid.to_string(), "PAID");
        assert_eq!("pendente".parse::<EntryStatus>().unwrap().to_string(), "PENDING");
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&EntryStatus::Paid).unwrap(), "\"PAID\"");
    }
}
