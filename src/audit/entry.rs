//! Audit record data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of change recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Ledger entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Category,
    Entry,
    MonthlyBudget,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityType::Category => write!(f, "Category"),
            EntityType::Entry => write!(f, "Entry"),
            EntityType::MonthlyBudget => write!(f, "MonthlyBudget"),
        }
    }
}

/// A single audit log record
///
/// `before` is present for updates and deletes, `after` for creates and
/// updates. Snapshots are the entity's JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub entity_type: EntityType,
    pub entity_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Record the creation of an entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            after: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Create, entity_type, entity_id.into(), entity_name)
        }
    }

    /// Record a change, computing the diff summary from the two snapshots
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let before = serde_json::to_value(before).ok();
        let after = serde_json::to_value(after).ok();
        let diff_summary = match (&before, &after) {
            (Some(b), Some(a)) => super::generate_diff(b, a),
            _ => None,
        };

        Self {
            before,
            after,
            diff_summary,
            ..Self::new(Operation::Update, entity_type, entity_id.into(), entity_name)
        }
    }

    /// Record the removal of an entity
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            before: serde_json::to_value(entity).ok(),
            ..Self::new(Operation::Delete, entity_type, entity_id.into(), entity_name)
        }
    }

    /// Format the record for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}
