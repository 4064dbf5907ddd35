// order-export - Fulfillment CSV Exporter
// Copyright (c) 2025 Order Export Contributors
// Licensed under the MIT License

//! # order-export - Fulfillment CSV Exporter
//!
//! Validates influencer order line items and exports the pending ones to the
//! fixed 59-column CSV layout a third-party fulfillment provider ingests.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Validating** order line items, including the typed line-item payload
//! - **Creating** order line items from an influencer and a product variant
//! - **Exporting** pending records to an ASCII-only, timestamped CSV
//! - **Marking** orders uploaded once the provider has accepted a file
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Export pipeline (row mapping, sanitization, CSV writing)
//! - [`adapters`] - Order store implementations
//! - [`domain`] - Core domain types and validation
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use order_export::config::load_config;
//! use order_export::core::export::ExportCoordinator;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("order-export.toml")?;
//!     let coordinator = ExportCoordinator::new(&config)?;
//!
//!     let summary = coordinator.execute_export(false)?;
//!     println!("Exported {} line items", summary.exported);
//!     Ok(())
//! }
//! ```
//!
//! ## Validation
//!
//! Stored records are validated one at a time. A record that fails is
//! reported with every problem found and left out of the file; the rest of
//! the batch is still exported.
//!
//! ```rust
//! use order_export::domain::OrderRecord;
//!
//! let record = OrderRecord::default();
//! let errors = record.validate(false).unwrap_err();
//! assert!(errors.has_field("name"));
//! assert!(errors.has_field("shipping_address"));
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::Result`], backed by
//! [`domain::OrderExportError`]. A character with no ASCII transliteration
//! aborts an export with [`domain::OrderExportError::Encoding`] rather than
//! producing a corrupt file.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
