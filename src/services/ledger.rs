//! Ledger service
//!
//! Wraps a [`MonthlyBudget`] and records every mutation in the audit log.
//! Each change is validated on a copy first and the audit record is written
//! before the change is applied, so a failed write leaves the budget as it
//! was.

use serde_json::{json, Value};
use std::sync::Arc;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{PocketbookPaths, Settings};
use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{
    BudgetSummary, Category, CategoryId, Entry, EntryId, EntryKind, EntryValidationError,
    LimitBreach, MonthlyBudget,
};

/// Audited access to a single month's budget
#[derive(Debug)]
pub struct LedgerService {
    budget: MonthlyBudget,
    audit: Option<AuditLogger>,
}

impl LedgerService {
    /// Create a service that does not keep an audit log
    pub fn new(budget: MonthlyBudget) -> Self {
        Self {
            budget,
            audit: None,
        }
    }

    /// Create a service that records mutations with `logger`
    pub fn with_audit(budget: MonthlyBudget, logger: AuditLogger) -> Self {
        Self {
            budget,
            audit: Some(logger),
        }
    }

    /// Create a service configured from user settings
    pub fn from_settings(
        budget: MonthlyBudget,
        settings: &Settings,
        paths: &PocketbookPaths,
    ) -> PocketbookResult<Self> {
        if !settings.audit_enabled {
            return Ok(Self::new(budget));
        }
        paths.ensure_directories()?;
        Ok(Self::with_audit(budget, AuditLogger::new(paths.audit_log())))
    }

    pub fn budget(&self) -> &MonthlyBudget {
        &self.budget
    }

    pub fn into_budget(self) -> MonthlyBudget {
        self.budget
    }

    pub fn audit_logger(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    fn record(&self, entry: AuditEntry) -> PocketbookResult<()> {
        match &self.audit {
            Some(logger) => logger.log(&entry),
            None => Ok(()),
        }
    }

    fn find_entry(&self, id: EntryId) -> PocketbookResult<&Entry> {
        self.budget
            .entry(id)
            .ok_or_else(|| PocketbookError::entry_not_found(id.to_string()))
    }

    /// Add an entry to the budget
    pub fn record_entry(&mut self, entry: Entry) -> PocketbookResult<EntryId> {
        let id = entry.id();
        self.record(AuditEntry::create(
            EntityType::Entry,
            id.to_string(),
            Some(entry.category().name().to_string()),
            &entry,
        ))?;
        self.budget.add_entry(entry);
        Ok(id)
    }

    /// Build an entry from loosely-typed input and add it
    pub fn record_from_value(
        &mut self,
        kind: EntryKind,
        category: Arc<Category>,
        input: &Value,
    ) -> PocketbookResult<EntryId> {
        let entry = Entry::from_value(kind, category, input)?;
        self.record_entry(entry)
    }

    /// Apply `change` to an entry; nothing is modified if it fails
    pub fn update_entry<F>(&mut self, id: EntryId, change: F) -> PocketbookResult<()>
    where
        F: FnOnce(&mut Entry) -> Result<(), EntryValidationError>,
    {
        let before = self.find_entry(id)?;
        let mut after = before.clone();
        change(&mut after)?;

        self.record(AuditEntry::update(
            EntityType::Entry,
            id.to_string(),
            Some(after.category().name().to_string()),
            before,
            &after,
        ))?;

        if let Some(slot) = self.budget.entry_mut(id) {
            *slot = after;
        }
        Ok(())
    }

    pub fn mark_entry_paid(&mut self, id: EntryId) -> PocketbookResult<()> {
        self.update_entry(id, |entry| {
            entry.mark_paid();
            Ok(())
        })
    }

    pub fn mark_entry_pending(&mut self, id: EntryId) -> PocketbookResult<()> {
        self.update_entry(id, |entry| {
            entry.mark_pending();
            Ok(())
        })
    }

    /// Remove an entry from the budget
    pub fn remove_entry(&mut self, id: EntryId) -> PocketbookResult<Entry> {
        let entry = self.find_entry(id)?;
        self.record(AuditEntry::delete(
            EntityType::Entry,
            id.to_string(),
            Some(entry.category().name().to_string()),
            entry,
        ))?;

        self.budget
            .remove_entry(id)
            .ok_or_else(|| PocketbookError::entry_not_found(id.to_string()))
    }

    /// Change a category and re-point every entry that references it
    ///
    /// Categories are shared immutably between entries, so an edit produces
    /// a new shared value. `current` only identifies the category: the edit
    /// starts from the version this budget's entries hold, which may be newer
    /// than `current`. Returns the updated category.
    pub fn update_category<F>(
        &mut self,
        current: &Category,
        change: F,
    ) -> PocketbookResult<Arc<Category>>
    where
        F: FnOnce(&mut Category) -> PocketbookResult<()>,
    {
        let held = self
            .held_category(current.id())
            .unwrap_or_else(|| Arc::new(current.clone()));
        let mut updated = Category::clone(&held);
        change(&mut updated)?;

        self.record(AuditEntry::update(
            EntityType::Category,
            held.id().to_string(),
            Some(updated.name().to_string()),
            &*held,
            &updated,
        ))?;

        let updated = Arc::new(updated);
        self.repoint_entries(held.id(), &updated);
        Ok(updated)
    }

    fn held_category(&self, id: CategoryId) -> Option<Arc<Category>> {
        self.budget
            .entries()
            .iter()
            .map(Entry::category)
            .find(|category| category.id() == id)
            .map(Arc::clone)
    }

    /// Rename a category across all of this budget's entries
    pub fn rename_category(
        &mut self,
        current: &Category,
        name: &str,
    ) -> PocketbookResult<Arc<Category>> {
        self.update_category(current, |category| Ok(category.set_name(name)?))
    }

    /// Set or clear a category's monthly limit across this budget's entries
    pub fn set_category_limit(
        &mut self,
        current: &Category,
        limit: Option<f64>,
    ) -> PocketbookResult<Arc<Category>> {
        self.update_category(current, |category| Ok(category.set_monthly_limit(limit)?))
    }

    fn repoint_entries(&mut self, id: CategoryId, updated: &Arc<Category>) {
        let ids: Vec<EntryId> = self
            .budget
            .entries()
            .iter()
            .filter(|e| e.category().id() == id)
            .map(Entry::id)
            .collect();

        for entry_id in ids {
            if let Some(entry) = self.budget.entry_mut(entry_id) {
                entry.set_category(Arc::clone(updated));
            }
        }
    }

    /// Move the budget to another month and year
    pub fn set_period(&mut self, month: u32, year: i32) -> PocketbookResult<()> {
        MonthlyBudget::new(month, year)?;

        self.record(AuditEntry::update(
            EntityType::MonthlyBudget,
            self.budget.to_string(),
            None,
            &json!({"month": self.budget.month(), "year": self.budget.year()}),
            &json!({"month": month, "year": year}),
        ))?;

        self.budget.set_month(month)?;
        self.budget.set_year(year)?;
        Ok(())
    }

    pub fn summary(&self) -> BudgetSummary {
        self.budget.summary()
    }

    pub fn negative_balance_alert(&self) -> &'static str {
        self.budget.negative_balance_alert()
    }

    pub fn limit_breaches(&self) -> Vec<LimitBreach> {
        self.budget.limit_breaches()
    }
}
