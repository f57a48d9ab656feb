//! Pocketbook - personal-finance bookkeeping model
//!
//! Categories, income and expense entries, and monthly budgets with eager
//! field validation and derived totals.
//!
//! # Architecture
//!
//! - `models`: validated data model (categories, entries, monthly budgets)
//! - `error`: crate error type
//! - `config`: path resolution and user settings
//! - `audit`: append-only change log
//! - `services`: audited and thread-safe access to a budget
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use pocketbook::models::{Category, CategoryKind, Entry, MonthlyBudget};
//!
//! let salary = Arc::new(Category::new("Salary", CategoryKind::Income)?);
//! let food = Arc::new(Category::new("Food", CategoryKind::Expense)?);
//! let day = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
//!
//! let mut budget = MonthlyBudget::new(3, 2025)?;
//! budget.add_entry(Entry::income(100.0, salary, day, "Pix", "paid")?);
//! budget.add_entry(Entry::expense(40.0, food, day, "Card", " PENDING ")?);
//!
//! assert_eq!(budget.balance(), 60.0);
//! assert_eq!(budget.negative_balance_alert(), "Balance is positive.");
//! # Ok::<(), pocketbook::PocketbookError>(())
//! ```

pub mod audit;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{PocketbookError, PocketbookResult};
