//! Configuration management.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - `ORDER_EXPORT_<SECTION>_<KEY>` environment overrides
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use order_export::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("order-export.toml")?;
//! println!("Order store: {}", config.store.path);
//! println!("Output directory: {}", config.export.output_dir);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run flag
//! - [`StoreConfig`] - Location of the order store
//! - [`ExportConfig`] - Output directory and file name prefix
//! - [`ValidationConfig`] - Record validation strictness
//! - [`LoggingConfig`] - Local file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [store]
//! path = "/srv/orders/orders.json"
//!
//! [export]
//! output_dir = "${ORDER_SPOOL_DIR}"
//! file_prefix = "Orders"
//!
//! [validation]
//! require_complete_line_items = false
//!
//! [logging]
//! local_enabled = true
//! local_path = "/var/log/order-export"
//! local_rotation = "daily"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default};
pub use schema::{
    AppConfig, ApplicationConfig, ExportConfig, LoggingConfig, StoreConfig, ValidationConfig,
};
