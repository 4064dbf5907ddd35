//! Create command implementation
//!
//! Builds an order line item from an influencer (addresses) and a product
//! variant (line item), validates it, and appends it to the order store.

use crate::adapters::store::{JsonFileStore, OrderRepository};
use crate::config::load_config_or_default;
use crate::domain::{CreateOrderOptions, Influencer, OrderLineItem, ProductVariant};
use anyhow::Context;
use chrono::Utc;
use clap::Args;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the create command
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// JSON file describing the influencer
    #[arg(long, value_name = "FILE")]
    pub influencer: PathBuf,

    /// JSON file describing the product variant
    #[arg(long, value_name = "FILE")]
    pub variant: PathBuf,

    /// Use this order number instead of generating one
    #[arg(long)]
    pub order_number: Option<String>,

    /// Requested shipment method (defaults to GROUND on export)
    #[arg(long)]
    pub shipment_method: Option<String>,
}

impl CreateArgs {
    /// Execute the create command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_config_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return Ok(2);
            }
        };

        let influencer: Influencer = read_json(&self.influencer)?;
        let variant: ProductVariant = read_json(&self.variant)?;
        let options = CreateOrderOptions {
            order_number: self.order_number.clone(),
            shipping_lines: None,
            shipment_method_requested: self.shipment_method.clone(),
        };

        let order = match OrderLineItem::from_influencer_variant(
            &influencer,
            &variant,
            options,
            &mut rand::thread_rng(),
            Utc::now(),
        ) {
            Ok(order) => order,
            Err(errors) => {
                tracing::warn!(errors = %errors, "Order line item failed validation");
                eprintln!("Order line item is invalid:");
                for error in errors.errors() {
                    eprintln!("  - {error}");
                }
                return Ok(2);
            }
        };

        let name = order.name().clone();
        let mut store = JsonFileStore::open(&config.store.path)?;
        store.insert(order)?;

        tracing::info!(
            name = %name,
            influencer_id = %influencer.id,
            sku = %variant.sku,
            "Order line item created"
        );
        println!("Created order line item {name}");
        Ok(0)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("variant.json");
        fs::write(&path, "{").unwrap();

        let err = read_json::<ProductVariant>(&path).unwrap_err();
        assert!(err.to_string().contains("variant.json"));
    }
}
