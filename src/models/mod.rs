//! Core data models for Pocketbook
//!
//! This module contains the bookkeeping domain: categories, income and
//! expense entries, and the monthly budget that aggregates them.

pub mod amount;
pub mod budget;
pub mod category;
pub mod entry;
pub mod ids;
pub mod status;

pub use amount::{Amount, DEFAULT_CURRENCY_SYMBOL};
pub use budget::{
    BudgetSummary, BudgetValidationError, LimitBreach, MonthlyBudget, NEGATIVE_BALANCE_ALERT,
    POSITIVE_BALANCE_MESSAGE,
};
pub use category::{Category, CategoryKind, CategoryValidationError};
pub use entry::{is_valid_date_format, sort_by_date, Entry, EntryKind, EntryValidationError};
pub use ids::{CategoryId, EntryId};
pub use status::{EntryStatus, StatusParseError};
