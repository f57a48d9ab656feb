//! Thread-safe budget handle
//!
//! Totals iterate the whole entry list, so concurrent writers must be
//! serialized. [`SharedBudget`] holds the budget behind a mutex; every read
//! sees a consistent set of entries.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::{BudgetSummary, Entry, MonthlyBudget};

/// Cloneable handle to a budget shared between threads
#[derive(Debug, Clone)]
pub struct SharedBudget {
    inner: Arc<Mutex<MonthlyBudget>>,
}

impl SharedBudget {
    pub fn new(budget: MonthlyBudget) -> Self {
        Self {
            inner: Arc::new(Mutex::new(budget)),
        }
    }

    // Recover from poisoning
    fn lock(&self) -> MutexGuard<'_, MonthlyBudget> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_entry(&self, entry: Entry) {
        self.lock().add_entry(entry);
    }

    /// Totals computed under a single lock acquisition
    pub fn summary(&self) -> BudgetSummary {
        self.lock().summary()
    }

    pub fn negative_balance_alert(&self) -> &'static str {
        self.lock().negative_balance_alert()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run `f` with exclusive access to the budget
    pub fn with_budget<R>(&self, f: impl FnOnce(&mut MonthlyBudget) -> R) -> R {
        f(&mut self.lock())
    }

    /// Copy of the budget as it is right now
    pub fn snapshot(&self) -> MonthlyBudget {
        self.lock().clone()
    }
}
