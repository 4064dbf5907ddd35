//! Core business logic.
//!
//! # Modules
//!
//! - [`export`] - Row mapping, sanitization, CSV writing and coordination
//!
//! # Export Workflow
//!
//! 1. **Select**: read records with no `uploaded_at` from the order store
//! 2. **Validate**: convert each record into an [`OrderLineItem`], skipping
//!    and reporting the invalid ones
//! 3. **Map**: build the warehouse row for each order
//! 4. **Sanitize**: transliterate every value to ASCII
//! 5. **Write**: emit `Orders_<timestamp>.csv`, header row first
//! 6. **Report**: return an export summary
//!
//! Marking the exported records as uploaded is a separate step, run once
//! the warehouse has accepted the file.
//!
//! [`OrderLineItem`]: crate::domain::OrderLineItem
//!
//! # Example
//!
//! ```rust,no_run
//! use order_export::config::load_config;
//! use order_export::core::export::ExportCoordinator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("order-export.toml")?;
//! let coordinator = ExportCoordinator::new(&config)?;
//! let summary = coordinator.execute_export(false)?;
//!
//! println!("Exported: {}", summary.exported);
//! println!("Skipped: {}", summary.skipped.len());
//! # Ok(())
//! # }
//! ```

pub mod export;
