//! Audit logging for Pocketbook
//!
//! The models never log. The service layer records each create, update and
//! delete as one line of JSON in an append-only file, with before/after
//! snapshots and a short summary of what changed.
//!
//! ```rust,ignore
//! use pocketbook::audit::{AuditEntry, AuditLogger, EntityType};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create(
//!     EntityType::Category,
//!     category.id().to_string(),
//!     Some(category.name().to_string()),
//!     &category,
//! ))?;
//! ```

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
