//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for order-export using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// order-export - fulfillment CSV exporter for influencer orders
#[derive(Parser, Debug)]
#[command(name = "order-export")]
#[command(version, about, long_about = None)]
#[command(author = "Order Export Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "order-export.toml", env = "ORDER_EXPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ORDER_EXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export pending order line items to a fulfillment CSV
    Export(commands::export::ExportArgs),

    /// Record that exported orders were accepted downstream
    MarkUploaded(commands::mark_uploaded::MarkUploadedArgs),

    /// Create an order line item from an influencer and a product variant
    Create(commands::create::CreateArgs),

    /// Print freshly generated order numbers
    GenerateOrderNumber(commands::generate::GenerateArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Execute the selected command and return its exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        match &self.command {
            Commands::Export(args) => args.execute(&self.config),
            Commands::MarkUploaded(args) => args.execute(&self.config),
            Commands::Create(args) => args.execute(&self.config),
            Commands::GenerateOrderNumber(args) => args.execute(),
            Commands::ValidateConfig(args) => args.execute(&self.config),
            Commands::Init(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["order-export", "export"]);
        assert_eq!(cli.config, "order-export.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["order-export", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["order-export", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["order-export", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_generate_order_number() {
        let cli = Cli::parse_from(["order-export", "generate-order-number", "--count", "3"]);
        match cli.command {
            Commands::GenerateOrderNumber(args) => assert_eq!(args.count, 3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["order-export", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
