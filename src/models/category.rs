//! Category model
//!
//! A category is a named bucket that entries point at. It may carry a
//! monthly spending limit; `None` means unlimited.

use serde::Serialize;
use std::fmt;

use super::ids::CategoryId;

/// Classification of a category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
    /// Any other caller-defined tag, kept verbatim
    Other(String),
}

impl CategoryKind {
    /// Parse a kind tag (case-insensitive)
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "income" | "receita" => Self::Income,
            "expense" | "despesa" => Self::Expense,
            _ => Self::Other(trimmed.to_string()),
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// A named grouping for entries
///
/// Fields are private so that every change goes through the same checks the
/// constructor applies.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    kind: CategoryKind,
    monthly_limit: Option<f64>,
    description: String,
}

impl Category {
    /// Create a new category without a limit or description
    pub fn new(name: impl Into<String>, kind: CategoryKind) -> Result<Self, CategoryValidationError> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self {
            id: CategoryId::new(),
            name,
            kind,
            monthly_limit: None,
            description: String::new(),
        })
    }

    /// Set a monthly limit while building
    pub fn with_limit(mut self, limit: f64) -> Result<Self, CategoryValidationError> {
        self.set_monthly_limit(Some(limit))?;
        Ok(self)
    }

    /// Set a description while building
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &CategoryKind {
        &self.kind
    }

    pub fn monthly_limit(&self) -> Option<f64> {
        self.monthly_limit
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Rename the category
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CategoryValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Set or clear the monthly limit
    pub fn set_monthly_limit(&mut self, limit: Option<f64>) -> Result<(), CategoryValidationError> {
        if let Some(value) = limit {
            if value.is_nan() {
                return Err(CategoryValidationError::LimitNotANumber);
            }
            if value < 0.0 {
                return Err(CategoryValidationError::NegativeLimit);
            }
        }
        self.monthly_limit = limit;
        Ok(())
    }

    pub fn set_kind(&mut self, kind: CategoryKind) {
        self.kind = kind;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Check whether a limit is configured
    pub fn has_limit(&self) -> bool {
        self.monthly_limit.is_some()
    }

    /// Check whether `spent` exceeds the monthly limit (never true when unlimited)
    pub fn is_over_limit(&self, spent: f64) -> bool {
        self.monthly_limit.is_some_and(|limit| spent > limit)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }
    Ok(())
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NegativeLimit,
    LimitNotANumber,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NegativeLimit => write!(f, "Monthly limit cannot be negative"),
            Self::LimitNotANumber => write!(f, "Monthly limit must be a number"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}
