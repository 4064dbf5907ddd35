//! Mark-uploaded command implementation
//!
//! After a CSV has been accepted by the fulfillment provider, this command
//! stamps `uploaded_at` on the line items it contained so the next export
//! skips them. Rows are matched back to individual records; siblings that
//! share an order name but were not in the file stay pending.

use crate::adapters::store::{JsonFileStore, OrderRepository};
use crate::config::load_config_or_default;
use crate::core::export::{exported_record_ids, named_record_ids, CSV_HEADERS};
use crate::domain::OrderName;
use anyhow::Context;
use chrono::Utc;
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the mark-uploaded command
#[derive(Args, Debug)]
pub struct MarkUploadedArgs {
    /// Exported CSV whose rows were accepted
    #[arg(long, value_name = "FILE", conflicts_with = "names", required_unless_present = "names")]
    pub csv: Option<PathBuf>,

    /// Mark every valid pending line item of these orders (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub names: Vec<String>,
}

impl MarkUploadedArgs {
    /// Execute the mark-uploaded command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };
        let strict = config.validation.require_complete_line_items;

        let mut store = JsonFileStore::open(&config.store.path)?;
        let pending = store.pending()?;

        let ids = match &self.csv {
            Some(path) => {
                let rows = read_exported_rows(path)?;
                let ids = exported_record_ids(&pending, &rows, strict);
                if ids.len() < rows.len() {
                    println!(
                        "{} of {} row(s) match no pending line item",
                        rows.len() - ids.len(),
                        rows.len()
                    );
                }
                ids
            }
            None => match parse_names(&self.names) {
                Ok(names) => named_record_ids(&pending, &names, strict),
                Err(e) => {
                    eprintln!("Invalid order name: {e}");
                    return Ok(2);
                }
            },
        };

        if ids.is_empty() {
            println!("No pending line items matched, nothing to mark.");
            return Ok(0);
        }

        let updated = store.mark_uploaded(&ids, Utc::now())?;
        tracing::info!(
            matched = ids.len(),
            updated,
            store = %store.path().display(),
            "Marked order line items as uploaded"
        );
        println!("Marked {updated} line item(s) as uploaded");
        Ok(0)
    }
}

/// Read the data rows of an exported CSV
///
/// The header row must be the export header, column for column.
pub fn read_exported_rows(path: &Path) -> anyhow::Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV {}", path.display()))?;

    let headers = reader.headers()?;
    if !headers.iter().eq(CSV_HEADERS.iter().copied()) {
        anyhow::bail!("{} is not an order export file", path.display());
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

fn parse_names(raw: &[String]) -> Result<Vec<OrderName>, String> {
    let mut names: Vec<OrderName> = raw
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .map(OrderName::new)
        .collect::<Result<_, _>>()?;
    names.sort();
    names.dedup();
    Ok(names)
}
