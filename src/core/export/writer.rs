//! CSV exporter
//!
//! Turns validated order line items into a warehouse CSV file. All rows are
//! built and sanitized before the file is created, so an encoding failure
//! never leaves a file behind; a write failure removes the partial file.

use super::columns::CSV_HEADERS;
use super::row::{row_mapping, to_record};
use super::sanitize::sanitize_row;
use crate::config::ExportConfig;
use crate::domain::order::OrderLineItem;
use crate::domain::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default file name prefix
pub const DEFAULT_FILE_PREFIX: &str = "Orders";

/// Builds the export file name for `now`
///
/// Format: `<prefix>_YYYY_MM_DD_HH_MM_SS_mmm.csv` in UTC.
pub fn csv_file_name(prefix: &str, now: DateTime<Utc>) -> String {
    format!("{prefix}_{}.csv", now.format("%Y_%m_%d_%H_%M_%S_%3f"))
}

/// Writes order line items to warehouse CSV files
#[derive(Debug, Clone)]
pub struct CsvExporter {
    output_dir: PathBuf,
    file_prefix: String,
}

impl CsvExporter {
    /// Create an exporter writing into `output_dir`
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }

    /// Create an exporter from configuration
    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(&config.output_dir).with_file_prefix(&config.file_prefix)
    }

    /// Override the file name prefix
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Export `orders`, naming the file after the current time
    ///
    /// # Errors
    ///
    /// Returns an encoding error if a value cannot be transliterated, or an
    /// I/O/CSV error if the file cannot be written. No file is left behind
    /// in either case.
    pub fn export(&self, orders: &[OrderLineItem]) -> Result<PathBuf> {
        self.export_at(orders, Utc::now())
    }

    /// Export `orders`, naming the file after `now`
    pub fn export_at(&self, orders: &[OrderLineItem], now: DateTime<Utc>) -> Result<PathBuf> {
        let rows = build_rows(orders)?;
        tracing::debug!(count = orders.len(), "Order line items");

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_dir.join(csv_file_name(&self.file_prefix, now));

        write_or_remove(&path, |path| write_file(path, &rows))?;

        tracing::info!(
            path = %path.display(),
            rows = rows.len(),
            "Order CSV written"
        );
        Ok(path)
    }
}

/// Builds sanitized records, in header order, for every order
///
/// # Errors
///
/// Fails on the first value that cannot be transliterated.
pub fn build_rows(orders: &[OrderLineItem]) -> Result<Vec<Vec<String>>> {
    orders.iter().map(build_row).collect()
}

/// Builds the sanitized record, in header order, for one order
pub fn build_row(order: &OrderLineItem) -> Result<Vec<String>> {
    let clean = sanitize_row(row_mapping(order))?;
    Ok(to_record(&clean))
}

/// Runs `write`, deleting whatever it left at `path` if it fails
fn write_or_remove<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let Err(e) = write(path) else {
        return Ok(());
    };

    tracing::error!(path = %path.display(), error = %e, "Failed to write order CSV");
    if path.is_file() {
        if let Err(remove_err) = fs::remove_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %remove_err,
                "Failed to remove partial order CSV"
            );
        }
    }
    Err(e)
}

fn write_file(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    write_rows(fs::File::create(path)?, rows)
}

fn write_rows<W: io::Write>(out: W, rows: &[Vec<String>]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(CSV_HEADERS)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
