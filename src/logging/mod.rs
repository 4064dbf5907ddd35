//! Logging and observability
//!
//! Structured logging built on `tracing`, with:
//! - Human readable console output
//! - Configurable log levels (`RUST_LOG` wins when set)
//! - Optional JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use order_export::logging::init_logging;
//! use order_export::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the start of an export run
///
/// # Example
///
/// ```no_run
/// use order_export::log_export_start;
///
/// log_export_start!(12, false);
/// ```
#[macro_export]
macro_rules! log_export_start {
    ($pending:expr, $dry_run:expr) => {
        tracing::info!(
            pending = $pending,
            dry_run = $dry_run,
            "Starting order export"
        );
    };
}

/// Log the completion of an export run
///
/// # Example
///
/// ```no_run
/// use order_export::log_export_complete;
/// use std::time::Duration;
///
/// log_export_complete!(42, Duration::from_millis(80));
/// ```
#[macro_export]
macro_rules! log_export_complete {
    ($count:expr, $duration:expr) => {
        tracing::info!(
            count = $count,
            duration_ms = $duration.as_millis() as u64,
            "Order export completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use order_export::log_error_with_context;
/// use order_export::domain::OrderExportError;
///
/// let error = OrderExportError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
