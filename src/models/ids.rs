//! Strongly-typed identifiers for ledger entities
//!
//! Identifiers exist so the audit log can refer to a category or entry across
//! mutations. They never take part in entry equality.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.simple().to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(CategoryId, "cat-");
define_id!(EntryId, "ent-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = EntryId::new();
        let display = id.to_string();
        assert!(display.starts_with("ent-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(CategoryId::new(), CategoryId::new());
    }

    #[test]
    fn test_id_parse_accepts_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let plain: CategoryId = uuid_str.parse().unwrap();
        let prefixed: CategoryId = format!("cat-{}", uuid_str).parse().unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_id_serializes_as_bare_uuid() {
        let id = CategoryId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
