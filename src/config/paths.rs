//! Path management for Pocketbook
//!
//! ## Path Resolution Order
//!
//! 1. `POCKETBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/pocketbook` or `~/.config/pocketbook`
//! 3. Windows: `%APPDATA%\pocketbook`

use std::path::PathBuf;

use crate::error::PocketbookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "POCKETBOOK_DATA_DIR";

/// Manages all paths used by Pocketbook
#[derive(Debug, Clone)]
pub struct PocketbookPaths {
    base_dir: PathBuf,
}

impl PocketbookPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home/config directory can be determined.
    pub fn new() -> Result<Self, PocketbookError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create PocketbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), PocketbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| PocketbookError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, PocketbookError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                PocketbookError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("pocketbook"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, PocketbookError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| PocketbookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("pocketbook"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PocketbookPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = PocketbookPaths::new().unwrap();
        env::remove_var(DATA_DIR_ENV);

        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("nested").join("pocketbook");
        let paths = PocketbookPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();
        assert!(nested.is_dir());
    }
}
