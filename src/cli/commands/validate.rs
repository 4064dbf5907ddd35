//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the order-export configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");
        println!();

        // load_config validates before returning
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Order Store: {}", config.store.path);
        println!("  Output Directory: {}", config.export.output_dir);
        println!("  File Prefix: {}", config.export.file_prefix);
        println!(
            "  Require Complete Line Items: {}",
            config.validation.require_complete_line_items
        );
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                format!("{} ({})", config.logging.local_path, config.logging.local_rotation)
            } else {
                "disabled".to_string()
            }
        );
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_config_is_config_error() {
        let args = ValidateArgs {};
        assert_eq!(args.execute("does-not-exist.toml").unwrap(), 2);
    }

    #[test]
    fn test_valid_config_succeeds() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[export]\nfile_prefix = \"Orders\"\n").unwrap();
        file.flush().unwrap();

        let args = ValidateArgs {};
        assert_eq!(args.execute(&file.path().to_string_lossy()).unwrap(), 0);
    }
}
