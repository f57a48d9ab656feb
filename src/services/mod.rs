//! Service layer for Pocketbook
//!
//! Sits on top of the models: audited mutations and thread-safe access.

pub mod ledger;
pub mod shared;

pub use ledger::LedgerService;
pub use shared::SharedBudget;
