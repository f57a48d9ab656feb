//! Monthly budget model
//!
//! A monthly budget collects entries for one month of one year and derives
//! totals from them. Nothing is cached: every total walks the current entry
//! list, so the figures always reflect the latest contents.

use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::category::Category;
use super::entry::{Entry, EntryKind};
use super::ids::EntryId;

/// Earliest year a budget may be opened for
pub const MIN_YEAR: i32 = 1940;
/// Latest year a budget may be opened for
pub const MAX_YEAR: i32 = 2100;

/// Returned by [`MonthlyBudget::negative_balance_alert`] when spending exceeds income
pub const NEGATIVE_BALANCE_ALERT: &str = "Warning: your balance is negative!";
/// Returned by [`MonthlyBudget::negative_balance_alert`] otherwise
pub const POSITIVE_BALANCE_MESSAGE: &str = "Balance is positive.";

/// Entries for a single calendar month
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyBudget {
    month: u32,
    year: i32,
    entries: Vec<Entry>,
}

/// Point-in-time totals of a budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// An expense category whose spending went over its monthly limit
#[derive(Debug, Clone)]
pub struct LimitBreach {
    pub category: Arc<Category>,
    pub limit: f64,
    pub spent: f64,
}

impl LimitBreach {
    /// How far spending went past the limit
    pub fn overspent(&self) -> f64 {
        self.spent - self.limit
    }
}

impl MonthlyBudget {
    /// Create an empty budget for `month` (1-12) of `year` (1940-2100)
    pub fn new(month: u32, year: i32) -> Result<Self, BudgetValidationError> {
        validate_month(month)?;
        validate_year(year)?;
        Ok(Self {
            month,
            year,
            entries: Vec::new(),
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_month(&mut self, month: u32) -> Result<(), BudgetValidationError> {
        validate_month(month)?;
        self.month = month;
        Ok(())
    }

    pub fn set_year(&mut self, year: i32) -> Result<(), BudgetValidationError> {
        validate_year(year)?;
        self.year = year;
        Ok(())
    }

    /// Append an entry
    ///
    /// The entry's date is not checked against the budget's month; use
    /// [`MonthlyBudget::entries_outside_period`] to find mismatches.
    pub fn add_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove an entry by ID, returning it if present
    pub fn remove_entry(&mut self, id: EntryId) -> Option<Entry> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn entry_mut(&mut self, id: EntryId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn total_of(&self, kind: EntryKind) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.kind() == kind)
            .map(Entry::amount)
            .sum()
    }

    /// Sum of all income entries
    pub fn total_income(&self) -> f64 {
        self.total_of(EntryKind::Income)
    }

    /// Sum of all expense entries
    pub fn total_expense(&self) -> f64 {
        self.total_of(EntryKind::Expense)
    }

    /// Income minus expense
    pub fn balance(&self) -> f64 {
        self.total_income() - self.total_expense()
    }

    /// Warning text when the balance is negative, a neutral message otherwise
    pub fn negative_balance_alert(&self) -> &'static str {
        if self.balance() < 0.0 {
            NEGATIVE_BALANCE_ALERT
        } else {
            POSITIVE_BALANCE_MESSAGE
        }
    }

    /// All three totals computed from the same pass over the entries
    pub fn summary(&self) -> BudgetSummary {
        let (total_income, total_expense) = self.entries.iter().fold(
            (0.0, 0.0),
            |(income, expense), e| match e.kind() {
                EntryKind::Income => (income + e.amount(), expense),
                EntryKind::Expense => (income, expense + e.amount()),
            },
        );
        BudgetSummary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Sum of entries of `kind` that are not yet paid
    pub fn pending_total(&self, kind: EntryKind) -> f64 {
        self.entries
            .iter()
            .filter(|e| e.kind() == kind && !e.is_paid())
            .map(Entry::amount)
            .sum()
    }

    /// First day of this budget's month
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Last day of this budget's month (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.start_date()
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    /// Check if a date falls in this budget's month
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Entries dated outside this budget's month
    pub fn entries_outside_period(&self) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| !self.contains_date(e.date()))
            .collect()
    }

    /// Entries in chronological order; same-day entries keep insertion order
    pub fn sorted_entries(&self) -> Vec<&Entry> {
        let mut sorted: Vec<&Entry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| a.cmp_by_date(b));
        sorted
    }

    /// Expense totals keyed by category name
    pub fn expense_by_category(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.is_expense()) {
            *totals
                .entry(entry.category().name().to_string())
                .or_insert(0.0) += entry.amount();
        }
        totals
    }

    /// Expense categories whose spending this month exceeds their limit
    ///
    /// Categories are grouped by name; the limit is taken from the first
    /// entry seen for each name. Results are ordered by category name.
    pub fn limit_breaches(&self) -> Vec<LimitBreach> {
        let mut spending: BTreeMap<&str, (&Arc<Category>, f64)> = BTreeMap::new();
        for entry in self.entries.iter().filter(|e| e.is_expense()) {
            let category = entry.category();
            spending.entry(category.name()).or_insert((category, 0.0)).1 += entry.amount();
        }

        spending
            .into_values()
            .filter_map(|(category, spent)| {
                let limit = category.monthly_limit()?;
                category.is_over_limit(spent).then(|| LimitBreach {
                    category: Arc::clone(category),
                    limit,
                    spent,
                })
            })
            .collect()
    }
}

impl fmt::Display for MonthlyBudget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

fn validate_month(month: u32) -> Result<(), BudgetValidationError> {
    if !(1..=12).contains(&month) {
        return Err(BudgetValidationError::MonthOutOfRange(month));
    }
    Ok(())
}

fn validate_year(year: i32) -> Result<(), BudgetValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(BudgetValidationError::YearOutOfRange(year));
    }
    Ok(())
}

/// Validation errors for monthly budgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    MonthOutOfRange(u32),
    YearOutOfRange(i32),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthOutOfRange(m) => write!(f, "Month must be between 1 and 12 (got {})", m),
            Self::YearOutOfRange(y) => write!(
                f,
                "Year must be between {} and {} (got {})",
                MIN_YEAR, MAX_YEAR, y
            ),
        }
    }
}

impl std::error::Error for BudgetValidationError {}
