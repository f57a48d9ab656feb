//! User settings for Pocketbook
//!
//! Display preferences and whether mutations are written to the audit log.

use serde::{Deserialize, Serialize};

use super::paths::PocketbookPaths;
use crate::error::PocketbookError;
use crate::models::{is_valid_date_format, Entry, DEFAULT_CURRENCY_SYMBOL};

/// User settings for Pocketbook
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether the ledger service records mutations in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &PocketbookPaths) -> Result<Self, PocketbookError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| PocketbookError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            PocketbookError::Config(format!("Failed to parse settings file: {}", e))
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), PocketbookError> {
        if !is_valid_date_format(&self.date_format) {
            return Err(PocketbookError::Config(format!(
                "Invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PocketbookPaths) -> Result<(), PocketbookError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PocketbookError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| PocketbookError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Render an entry with this user's currency symbol and date format
    pub fn format_entry(&self, entry: &Entry) -> String {
        entry.display_with(&self.currency_symbol, &self.date_format)
    }
}
