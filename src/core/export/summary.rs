//! Export summary and reporting
//!
//! This module defines structures for tracking and reporting export results.

use crate::domain::errors::ValidationErrors;
use crate::domain::ids::RecordId;
use std::path::PathBuf;
use std::time::Duration;

/// A pending record left out of the export because it failed validation
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    /// Stored name, if any
    pub name: Option<String>,

    /// Why it was skipped
    pub errors: ValidationErrors,
}

/// Summary of an export operation
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Number of pending records considered
    pub total_records: usize,

    /// Number of rows written
    pub exported: usize,

    /// Store ids of the records behind those rows, in row order
    pub exported_ids: Vec<RecordId>,

    /// Records that failed validation
    pub skipped: Vec<SkippedRecord>,

    /// The CSV written (None on dry run)
    pub file: Option<PathBuf>,

    /// Whether this was a dry run
    pub dry_run: bool,

    /// Duration of the export
    pub duration: Duration,
}

impl ExportSummary {
    /// Create a new empty export summary
    pub fn new() -> Self {
        Self {
            total_records: 0,
            exported: 0,
            exported_ids: Vec::new(),
            skipped: Vec::new(),
            file: None,
            dry_run: false,
            duration: Duration::from_secs(0),
        }
    }

    /// Set the duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Record a skipped record
    pub fn add_skipped(&mut self, name: Option<String>, errors: ValidationErrors) {
        self.skipped.push(SkippedRecord { name, errors });
    }

    /// Check if every pending record was exported
    pub fn is_successful(&self) -> bool {
        self.skipped.is_empty()
    }
}

impl Default for ExportSummary {
    fn default() -> Self {
        Self::new()
    }
}
