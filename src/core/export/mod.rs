//! Warehouse CSV export
//!
//! This module provides the export logic, including:
//! - The fixed warehouse column schema
//! - Order → row mapping and ASCII sanitization
//! - CSV file writing
//! - Export coordination and summary reporting

pub mod columns;
pub mod coordinator;
pub mod reconcile;
pub mod row;
pub mod sanitize;
pub mod summary;
pub mod writer;

pub use columns::{CSV_DATE_FMT, CSV_HEADERS};
pub use coordinator::ExportCoordinator;
pub use reconcile::{exported_record_ids, named_record_ids};
pub use summary::{ExportSummary, SkippedRecord};
pub use writer::{csv_file_name, CsvExporter};
