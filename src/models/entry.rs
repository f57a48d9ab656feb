//! Entry model
//!
//! An entry is a single dated movement of money, either income or expense.
//! Both variants share every field; the [`EntryKind`] tag decides which
//! budget total an entry counts towards.
//!
//! Entries compare equal on amount, category name and date only. Ordering is
//! by date alone, exposed as explicit comparison helpers rather than
//! `PartialOrd` so that it cannot disagree with equality.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::amount::{Amount, AmountError, DEFAULT_CURRENCY_SYMBOL};
use super::category::Category;
use super::ids::EntryId;
use super::status::{EntryStatus, StatusParseError};

const ISO_DATE: &str = "%Y-%m-%d";

/// Which side of the ledger an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial movement referencing a shared [`Category`]
#[derive(Clone, Serialize)]
pub struct Entry {
    id: EntryId,
    kind: EntryKind,
    amount: Amount,
    category: Arc<Category>,
    date: NaiveDate,
    payment_method: String,
    status: EntryStatus,
}

impl Entry {
    /// Create a new entry
    ///
    /// `status` is free-form text; see [`EntryStatus::parse`]. Fields are
    /// checked in order: amount, payment method, status.
    pub fn new(
        kind: EntryKind,
        amount: f64,
        category: Arc<Category>,
        date: NaiveDate,
        payment_method: impl Into<String>,
        status: &str,
    ) -> Result<Self, EntryValidationError> {
        let amount = Amount::new(amount)?;
        let payment_method = payment_method.into();
        validate_payment_method(&payment_method)?;

        Ok(Self {
            id: EntryId::new(),
            kind,
            amount,
            category,
            date,
            payment_method,
            status: EntryStatus::parse(status)?,
        })
    }

    /// Create an income entry
    pub fn income(
        amount: f64,
        category: Arc<Category>,
        date: NaiveDate,
        payment_method: impl Into<String>,
        status: &str,
    ) -> Result<Self, EntryValidationError> {
        Self::new(EntryKind::Income, amount, category, date, payment_method, status)
    }

    /// Create an expense entry
    pub fn expense(
        amount: f64,
        category: Arc<Category>,
        date: NaiveDate,
        payment_method: impl Into<String>,
        status: &str,
    ) -> Result<Self, EntryValidationError> {
        Self::new(EntryKind::Expense, amount, category, date, payment_method, status)
    }

    /// Build an entry from loosely-typed JSON input
    ///
    /// Expects an object with `amount` (number), `date` (`YYYY-MM-DD`
    /// string), `payment_method` (string) and `status` (string). Each field
    /// is type-checked and then range-checked before the next one is read,
    /// in that order, so the first bad field decides the error.
    pub fn from_value(
        kind: EntryKind,
        category: Arc<Category>,
        input: &Value,
    ) -> Result<Self, EntryValidationError> {
        let amount = input
            .get("amount")
            .and_then(Value::as_f64)
            .ok_or(EntryValidationError::WrongType {
                field: "amount",
                expected: "a number",
            })?;
        let amount = Amount::new(amount)?;

        let date = input
            .get("date")
            .and_then(Value::as_str)
            .and_then(|s| NaiveDate::parse_from_str(s, ISO_DATE).ok())
            .ok_or(EntryValidationError::WrongType {
                field: "date",
                expected: "a calendar date (YYYY-MM-DD)",
            })?;

        let payment_method = input
            .get("payment_method")
            .and_then(Value::as_str)
            .ok_or(EntryValidationError::WrongType {
                field: "payment_method",
                expected: "text",
            })?;
        validate_payment_method(payment_method)?;

        let status = input
            .get("status")
            .and_then(Value::as_str)
            .ok_or(EntryValidationError::WrongType {
                field: "status",
                expected: "text",
            })?;

        Ok(Self {
            id: EntryId::new(),
            kind,
            amount,
            category,
            date,
            payment_method: payment_method.to_string(),
            status: EntryStatus::parse(status)?,
        })
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn amount(&self) -> f64 {
        self.amount.value()
    }

    pub fn category(&self) -> &Arc<Category> {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    pub fn status(&self) -> EntryStatus {
        self.status
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == EntryKind::Expense
    }

    /// Change the amount
    pub fn set_amount(&mut self, amount: f64) -> Result<(), EntryValidationError> {
        self.amount = Amount::new(amount)?;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    /// Change the payment method
    pub fn set_payment_method(
        &mut self,
        payment_method: impl Into<String>,
    ) -> Result<(), EntryValidationError> {
        let payment_method = payment_method.into();
        validate_payment_method(&payment_method)?;
        self.payment_method = payment_method;
        Ok(())
    }

    /// Change the status from free-form text
    pub fn set_status(&mut self, status: &str) -> Result<(), EntryValidationError> {
        self.status = EntryStatus::parse(status)?;
        Ok(())
    }

    pub fn set_category(&mut self, category: Arc<Category>) {
        self.category = category;
    }

    pub fn mark_paid(&mut self) {
        self.status = EntryStatus::Paid;
    }

    pub fn mark_pending(&mut self) {
        self.status = EntryStatus::Pending;
    }

    pub fn is_paid(&self) -> bool {
        self.status == EntryStatus::Paid
    }

    /// Compare two entries by date only
    pub fn cmp_by_date(&self, other: &Self) -> Ordering {
        self.date.cmp(&other.date)
    }

    /// Check whether this entry falls strictly before `other`
    pub fn is_before(&self, other: &Self) -> bool {
        self.date < other.date
    }

    /// Render using a custom currency symbol and strftime date format
    ///
    /// An invalid `date_format` falls back to `YYYY-MM-DD`.
    pub fn display_with(&self, currency_symbol: &str, date_format: &str) -> String {
        let date_format = if is_valid_date_format(date_format) {
            date_format
        } else {
            ISO_DATE
        };
        format!(
            "{} - {} - {}",
            self.date.format(date_format),
            self.category.name(),
            self.amount.format_with_symbol(currency_symbol)
        )
    }
}

/// Sort entries chronologically; entries sharing a date keep their order
pub fn sort_by_date(entries: &mut [Entry]) {
    entries.sort_by(Entry::cmp_by_date);
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
            && self.category.name() == other.category.name()
            && self.date == other.date
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(DEFAULT_CURRENCY_SYMBOL, ISO_DATE))
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Entry(amount={:?}, category={}, date={})",
            self.amount.value(),
            self.category.name(),
            self.date.format(ISO_DATE)
        )
    }
}

/// Check that `format` is a strftime pattern chrono can render
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

fn validate_payment_method(payment_method: &str) -> Result<(), EntryValidationError> {
    if payment_method.trim().is_empty() {
        return Err(EntryValidationError::EmptyPaymentMethod);
    }
    Ok(())
}

/// Validation errors for entries
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValidationError {
    NonPositiveAmount,
    AmountNotFinite,
    EmptyPaymentMethod,
    InvalidStatus(String),
    /// A loosely-typed input field held the wrong kind of value
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

impl From<AmountError> for EntryValidationError {
    fn from(err: AmountError) -> Self {
        match err {
            AmountError::NotPositive(_) => Self::NonPositiveAmount,
            AmountError::NotFinite => Self::AmountNotFinite,
        }
    }
}

impl From<StatusParseError> for EntryValidationError {
    fn from(err: StatusParseError) -> Self {
        match err {
            StatusParseError::Unknown(s) => Self::InvalidStatus(s),
        }
    }
}

impl fmt::Display for EntryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than 0"),
            Self::AmountNotFinite => write!(f, "Amount must be a finite number"),
            Self::EmptyPaymentMethod => write!(f, "Payment method cannot be empty"),
            Self::InvalidStatus(s) => {
                write!(f, "Invalid status '{}'. Choose between: PENDING, PAID", s)
            }
            Self::WrongType { field, expected } => {
                write!(f, "Field '{}' must be {}", field, expected)
            }
        }
    }
}

impl std::error::Error for EntryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::CategoryKind;
    use serde_json::json;

    fn salary() -> Arc<Category> {
        Arc::new(Category::new("Salary", CategoryKind::Income).unwrap())
    }

    fn groceries() -> Arc<Category> {
        Arc::new(Category::new("Groceries", CategoryKind::Expense).unwrap())
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    fn expense(amount: f64, day: u32) -> Entry {
        Entry::expense(amount, groceries(), date(day), "Pix", "PENDING").unwrap()
    }

    #[test]
    fn test_new_entry() {
        let entry = Entry::income(2500.0, salary(), date(5), "Transfer", "paid").unwrap();
        assert_eq!(entry.kind(), EntryKind::Income);
        assert!(entry.is_income());
        assert!(!entry.is_expense());
        assert_eq!(entry.amount(), 2500.0);
        assert_eq!(entry.category().name(), "Salary");
        assert_eq!(entry.date(), date(5));
        assert_eq!(entry.payment_method(), "Transfer");
        assert!(entry.is_paid());
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for amount in [0.0, -0.01, -100.0] {
            let result = Entry::expense(amount, groceries(), date(1), "Cash", "PENDING");
            assert_eq!(result.err(), Some(EntryValidationError::NonPositiveAmount));
        }
        let result = Entry::expense(f64::NAN, groceries(), date(1), "Cash", "PENDING");
        assert_eq!(result.err(), Some(EntryValidationError::AmountNotFinite));
    }

    #[test]
    fn test_status_normalized() {
        for token in [" paid ", "PAID", "Paid"] {
            let entry = Entry::expense(10.0, groceries(), date(1), "Card", token).unwrap();
            assert_eq!(entry.status(), EntryStatus::Paid);
            assert_eq!(entry.status().to_string(), "PAID");
        }
    }

    #[test]
    fn test_invalid_status_rejected() {
        let result = Entry::expense(10.0, groceries(), date(1), "Card", "settled");
        assert_eq!(
            result.err(),
            Some(EntryValidationError::InvalidStatus("settled".into()))
        );
    }

    #[test]
    fn test_payment_method_validation() {
        for method in ["", "   ", "\t"] {
            let result = Entry::expense(10.0, groceries(), date(1), method, "PAID");
            assert_eq!(result.err(), Some(EntryValidationError::EmptyPaymentMethod));
        }

        let mut entry = expense(10.0, 1);
        assert_eq!(
            entry.set_payment_method(" "),
            Err(EntryValidationError::EmptyPaymentMethod)
        );
        assert_eq!(entry.payment_method(), "Pix");
        entry.set_payment_method("Cash").unwrap();
        assert_eq!(entry.payment_method(), "Cash");
    }

    #[test]
    fn test_setters_revalidate() {
        let mut entry = expense(10.0, 1);
        assert_eq!(entry.set_amount(0.0), Err(EntryValidationError::NonPositiveAmount));
        assert_eq!(entry.amount(), 10.0);

        assert!(entry.set_status("done").is_err());
        assert_eq!(entry.status(), EntryStatus::Pending);

        entry.set_status(" Pago ").unwrap();
        assert!(entry.is_paid());
    }

    #[test]
    fn test_mark_paid_and_pending() {
        let mut entry = expense(10.0, 1);
        entry.mark_paid();
        assert!(entry.is_paid());
        entry.mark_pending();
        assert!(!entry.is_paid());
    }

    #[test]
    fn test_from_value() {
        let input = json!({
            "amount": 42,
            "date": "2025-03-07",
            "payment_method": "Card",
            "status": " pending ",
        });
        let entry = Entry::from_value(EntryKind::Expense, groceries(), &input).unwrap();
        assert_eq!(entry.amount(), 42.0);
        assert_eq!(entry.date(), date(7));
        assert_eq!(entry.status(), EntryStatus::Pending);
    }

    #[test]
    fn test_from_value_rejects_non_dates() {
        let non_dates = [
            json!(20250307),
            json!("07/03/2025"),
            json!("2025-02-30"),
            json!(null),
            json!(["2025-03-07"]),
        ];
        for bad in non_dates {
            let input = json!({
                "amount": 10.0,
                "date": bad,
                "payment_method": "Pix",
                "status": "PAID",
            });
            let err = Entry::from_value(EntryKind::Expense, groceries(), &input).unwrap_err();
            assert!(
                matches!(err, EntryValidationError::WrongType { field: "date", .. }),
                "{err:?}"
            );
        }
    }

    #[test]
    fn test_from_value_rejects_non_text_payment_method() {
        let input = json!({
            "amount": 10.0,
            "date": "2025-03-07",
            "payment_method": 5,
            "status": "PAID",
        });
        let err = Entry::from_value(EntryKind::Income, salary(), &input).unwrap_err();
        assert!(matches!(
            err,
            EntryValidationError::WrongType { field: "payment_method", .. }
        ));

        let input = json!({
            "amount": 10.0,
            "date": "2025-03-07",
            "payment_method": "  ",
            "status": "PAID",
        });
        let err = Entry::from_value(EntryKind::Income, salary(), &input).unwrap_err();
        assert_eq!(err, EntryValidationError::EmptyPaymentMethod);
    }

    #[test]
    fn test_from_value_rejects_non_numeric_amount() {
        for bad in [json!("10.0"), json!(null), json!(true)] {
            let input = json!({
                "amount": bad,
                "date": "2025-03-07",
                "payment_method": "Pix",
                "status": "PAID",
            });
            let err = Entry::from_value(EntryKind::Income, salary(), &input).unwrap_err();
            assert!(
                matches!(err, EntryValidationError::WrongType { field: "amount", .. }),
                "{err:?}"
            );
        }
    }

    #[test]
    fn test_from_value_rejects_non_text_status() {
        for bad in [json!(1), json!(null), json!(["PAID"])] {
            let input = json!({
                "amount": 10.0,
                "date": "2025-03-07",
                "payment_method": "Pix",
                "status": bad,
            });
            let err = Entry::from_value(EntryKind::Income, salary(), &input).unwrap_err();
            assert!(
                matches!(err, EntryValidationError::WrongType { field: "status", .. }),
                "{err:?}"
            );
        }
    }

    #[test]
    fn test_from_value_reports_first_bad_field() {
        let input = json!({
            "amount": 0,
            "date": 123,
            "payment_method": "Pix",
            "status": "PAID",
        });
        let err = Entry::from_value(EntryKind::Income, salary(), &input).unwrap_err();
        assert_eq!(err, EntryValidationError::NonPositiveAmount);

        let input = json!({
            "amount": 10.0,
            "date": "2025-03-07",
            "payment_method": "",
            "status": 7,
        });
        let err = Entry::from_value(EntryKind::Income, salary(), &input).unwrap_err();
        assert_eq!(err, EntryValidationError::EmptyPaymentMethod);

        let input = json!({
            "amount": 10.0,
            "date": 123,
            "payment_method": 5,
            "status": "PAID",
        });
        let err = Entry::from_value(EntryKind::Income, salary(), &input).unwrap_err();
        assert!(matches!(err, EntryValidationError::WrongType { field: "date", .. }));
    }

    #[test]
    fn test_new_checks_amount_first() {
        let result = Entry::expense(0.0, groceries(), date(1), "", "settled");
        assert_eq!(result.err(), Some(EntryValidationError::NonPositiveAmount));

        let result = Entry::expense(10.0, groceries(), date(1), "", "settled");
        assert_eq!(result.err(), Some(EntryValidationError::EmptyPaymentMethod));
    }

    #[test]
    fn test_equality_ignores_payment_method_and_status() {
        let a = Entry::expense(50.0, groceries(), date(3), "Pix", "PAID").unwrap();
        let b = Entry::expense(50.0, groceries(), date(3), "Cash", "PENDING").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_uses_category_name_not_identity() {
        let a = Entry::expense(50.0, groceries(), date(3), "Pix", "PAID").unwrap();
        let b = Entry::expense(50.0, groceries(), date(3), "Pix", "PAID").unwrap();
        assert_ne!(a.category().id(), b.category().id());
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_broken_by_key_fields() {
        let base = expense(50.0, 3);

        let mut other = base.clone();
        other.set_amount(50.5).unwrap();
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_date(date(4));
        assert_ne!(base, other);

        let mut other = base.clone();
        other.set_category(salary());
        assert_ne!(base, other);
    }

    #[test]
    fn test_sort_by_date() {
        let mut entries = vec![
            expense(1.0, 20),
            expense(2.0, 2),
            expense(3.0, 11),
            expense(4.0, 2),
        ];
        sort_by_date(&mut entries);

        let amounts: Vec<f64> = entries.iter().map(Entry::amount).collect();
        assert_eq!(amounts, vec![2.0, 4.0, 3.0, 1.0]);
        for pair in entries.windows(2) {
            assert!(!pair[1].is_before(&pair[0]));
        }
        assert!(entries[0].is_before(&entries[2]));
        assert!(!entries[0].is_before(&entries[1]));
    }

    #[test]
    fn test_display() {
        let entry = Entry::expense(1234.5, groceries(), date(9), "Card", "PAID").unwrap();
        assert_eq!(entry.to_string(), "2025-03-09 - Groceries - R$ 1234.50");
        assert_eq!(
            entry.display_with("$", "%d/%m/%Y"),
            "09/03/2025 - Groceries - $ 1234.50"
        );
        assert_eq!(
            entry.display_with("$", "%Q"),
            "2025-03-09 - Groceries - $ 1234.50"
        );
    }

    #[test]
    fn test_date_format_validity() {
        assert!(is_valid_date_format("%Y-%m-%d"));
        assert!(is_valid_date_format("%d/%m/%Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format("%Y-%"));
    }

    #[test]
    fn test_debug() {
        let entry = Entry::income(100.0, salary(), date(5), "Pix", "PAID").unwrap();
        assert_eq!(
            format!("{:?}", entry),
            "Entry(amount=100.0, category=Salary, date=2025-03-05)"
        );
    }
}
