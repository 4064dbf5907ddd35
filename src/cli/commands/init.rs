//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "order-export.toml")]
    pub output: String,

    /// Include commented optional settings
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: order-export validate-config");
                println!("  3. Run export: order-export export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5)
            }
        }
    }

    fn generate_minimal_config() -> String {
        r#"# order-export configuration

[application]
log_level = "info"
dry_run = false

[store]
path = "orders.json"

[export]
output_dir = "/tmp"
file_prefix = "Orders"

[validation]
require_complete_line_items = false

[logging]
local_enabled = false
"#
        .to_string()
    }

    fn generate_config_with_examples() -> String {
        r#"# order-export configuration
#
# Values may reference environment variables with ${VAR_NAME}.
# Any key can also be overridden with ORDER_EXPORT_<SECTION>_<KEY>,
# e.g. ORDER_EXPORT_EXPORT_OUTPUT_DIR=/srv/outbox

[application]
# trace | debug | info | warn | error
log_level = "info"
# Build and sanitize rows without writing the CSV
dry_run = false

[store]
# JSON array of order line item records
path = "orders.json"

[export]
# Directory the fulfillment CSV is written to
output_dir = "/tmp"
# File name is <prefix>_YYYY_MM_DD_HH_MM_SS_mmm.csv
file_prefix = "Orders"

[validation]
# Also reject line items that lack a key from the line item shape
require_complete_line_items = false

[logging]
# JSON file logs in addition to the console
local_enabled = false
local_path = "logs"
# daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generated_configs_parse_and_validate() {
        for content in [
            InitArgs::generate_minimal_config(),
            InitArgs::generate_config_with_examples(),
        ] {
            let config: AppConfig = toml::from_str(&content).unwrap();
            assert!(config.validate().is_ok());
            assert_eq!(config.export.file_prefix, "Orders");
        }
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("order-export.toml");
        fs::write(&output, "# existing").unwrap();

        let args = InitArgs {
            output: output.to_string_lossy().to_string(),
            with_examples: false,
            force: false,
        };
        assert_eq!(args.execute().unwrap(), 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "# existing");

        let args = InitArgs { force: true, ..args };
        assert_eq!(args.execute().unwrap(), 0);
        assert!(fs::read_to_string(&output).unwrap().contains("[export]"));
    }
}
