//! Export command implementation
//!
//! This module implements the `export` command, which writes every pending
//! order line item to a fulfillment CSV.

use crate::config::load_config_or_default;
use crate::core::export::{ExportCoordinator, ExportSummary};
use clap::Args;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Dry run mode - build and sanitize rows without writing the CSV
    #[arg(long)]
    pub dry_run: bool,

    /// Override the output directory
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        if let Some(dir) = &self.output_dir {
            tracing::info!(output_dir = %dir, "Overriding output directory from CLI");
            config.export.output_dir = dir.clone();
        }

        let dry_run = self.dry_run || config.application.dry_run;
        if dry_run {
            tracing::info!("Dry run mode enabled - no file will be written");
            println!("DRY RUN MODE - No file will be written");
            println!();
        }

        let coordinator = match ExportCoordinator::new(&config) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to open order store");
                eprintln!("Failed to initialize export: {e}");
                return Ok(2);
            }
        };

        let summary = match coordinator.execute_export(dry_run) {
            Ok(s) => s,
            Err(e) => {
                crate::log_error_with_context!(&e, "Export failed");
                eprintln!("Export failed: {e}");
                return Ok(5);
            }
        };

        print_summary(&summary);
        Ok(exit_code(&summary))
    }
}

fn print_summary(summary: &ExportSummary) {
    println!("Export Summary:");
    println!("  Pending records: {}", summary.total_records);
    println!("  Exported: {}", summary.exported);
    println!("  Skipped: {}", summary.skipped.len());
    if let Some(file) = &summary.file {
        println!("  File: {}", file.display());
    }
    println!("  Duration: {:.2}s", summary.duration.as_secs_f64());

    if !summary.skipped.is_empty() {
        println!();
        println!("Skipped records:");
        for skipped in &summary.skipped {
            println!(
                "  - {}: {}",
                skipped.name.as_deref().unwrap_or("<unnamed>"),
                skipped.errors
            );
        }
    }
    println!();
}

/// 0 when every pending record was exported, 1 when some were skipped
fn exit_code(summary: &ExportSummary) -> i32 {
    if summary.is_successful() {
        println!("Export completed successfully!");
        0
    } else {
        println!("Export completed with skipped records");
        1
    }
}
