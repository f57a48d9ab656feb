//! Append-only audit log
//!
//! Each record is written as one JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{PocketbookError, PocketbookResult};

use super::entry::AuditEntry;

/// Writes audit records to a JSON-lines file
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    fn open_for_append(&self) -> PocketbookResult<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| PocketbookError::Io(format!("Failed to open audit log: {}", e)))
    }

    fn write_line(file: &mut File, entry: &AuditEntry) -> PocketbookResult<()> {
        let json = serde_json::to_string(entry).map_err(|e| {
            PocketbookError::Json(format!("Failed to serialize audit entry: {}", e))
        })?;

        writeln!(file, "{}", json)
            .map_err(|e| PocketbookError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// Append one record
    pub fn log(&self, entry: &AuditEntry) -> PocketbookResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Append several records with a single flush
    pub fn log_batch(&self, entries: &[AuditEntry]) -> PocketbookResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = self.open_for_append()?;
        for entry in entries {
            Self::write_line(&mut file, entry)?;
        }

        file.flush()
            .map_err(|e| PocketbookError::Io(format!("Failed to flush audit log: {}", e)))
    }

    /// Read all records, oldest first
    pub fn read_all(&self) -> PocketbookResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| PocketbookError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut entries = Vec::new();
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                PocketbookError::Io(format!(
                    "Failed to read audit log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                PocketbookError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent `count` records
    pub fn read_recent(&self, count: usize) -> PocketbookResult<Vec<AuditEntry>> {
        let mut all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries.split_off(start))
    }

    /// Number of records in the log
    pub fn entry_count(&self) -> PocketbookResult<usize> {
        Ok(self.read_all()?.len())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
