//! Export coordinator - orchestrates one export run
//!
//! Selects the pending records from the order store, validates them,
//! and hands the valid ones to the [`CsvExporter`]. Invalid records are
//! reported in the summary and do not stop the rest of the batch.
//! Upload marking is left to the caller once the file has been accepted
//! downstream, and covers only the records the file actually contains.

use super::summary::ExportSummary;
use super::writer::{build_rows, CsvExporter};
use crate::adapters::store::{JsonFileStore, OrderRepository};
use crate::config::AppConfig;
use crate::domain::order::OrderLineItem;
use crate::domain::Result;
use chrono::{DateTime, Utc};
use std::time::Instant;

/// Export coordinator
pub struct ExportCoordinator {
    store: Box<dyn OrderRepository>,
    exporter: CsvExporter,
    require_complete_line_items: bool,
}

impl ExportCoordinator {
    /// Create a coordinator backed by the configured JSON store
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store = JsonFileStore::open(&config.store.path)?;
        Ok(Self::with_store(
            Box::new(store),
            CsvExporter::from_config(&config.export),
            config.validation.require_complete_line_items,
        ))
    }

    /// Create a coordinator over any order repository
    pub fn with_store(
        store: Box<dyn OrderRepository>,
        exporter: CsvExporter,
        require_complete_line_items: bool,
    ) -> Self {
        Self {
            store,
            exporter,
            require_complete_line_items,
        }
    }

    /// Export every pending record
    ///
    /// With `dry_run` set, rows are built and sanitized but no file is
    /// written.
    ///
    /// # Errors
    ///
    /// Store, encoding and I/O failures abort the run. Validation failures
    /// only skip the offending record.
    pub fn execute_export(&self, dry_run: bool) -> Result<ExportSummary> {
        let start_time = Instant::now();
        let mut summary = ExportSummary::new();
        summary.dry_run = dry_run;

        let pending = self.store.pending()?;
        summary.total_records = pending.len();
        crate::log_export_start!(pending.len(), dry_run);

        let mut orders: Vec<OrderLineItem> = Vec::with_capacity(pending.len());
        for record in pending {
            match record.validate(self.require_complete_line_items) {
                Ok(order) => orders.push(order),
                Err(errors) => {
                    tracing::warn!(
                        name = record.name.as_deref().unwrap_or("<unnamed>"),
                        errors = %errors,
                        "Skipping invalid order line item"
                    );
                    summary.add_skipped(record.name.clone(), errors);
                }
            }
        }

        if dry_run {
            build_rows(&orders)?;
            tracing::info!(rows = orders.len(), "Dry run - no file written");
        } else {
            summary.file = Some(self.exporter.export(&orders)?);
        }
        summary.exported = orders.len();
        summary.exported_ids = orders.iter().filter_map(OrderLineItem::record_id).collect();

        let summary = summary.with_duration(start_time.elapsed());
        crate::log_export_complete!(summary.exported, summary.duration);
        Ok(summary)
    }

    /// Mark the records exported by `summary` as uploaded
    ///
    /// Skipped siblings sharing an order name stay pending.
    pub fn mark_uploaded(&mut self, summary: &ExportSummary, at: DateTime<Utc>) -> Result<usize> {
        let updated = self.store.mark_uploaded(&summary.exported_ids, at)?;
        tracing::info!(updated, "Marked exported line items as uploaded");
        Ok(updated)
    }
}
