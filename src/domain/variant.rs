//! Collaborator inputs for order creation
//!
//! Orders are created from an influencer (who supplies the addresses) and a
//! product variant (which supplies the line item). Both are loaded by the
//! caller and handed over as plain records.

use super::address::Address;
use super::ids::InfluencerId;
use super::line_item::LineItem;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The party an order is shipped to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Influencer {
    pub id: InfluencerId,
    pub billing_address: Address,
    pub shipping_address: Address,
}

/// A purchasable product variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub product_id: i64,
    pub sku: String,

    /// First option value, used as the size
    #[serde(default)]
    pub option1: Option<String>,

    pub price: f64,
    pub weight: i64,

    /// Title of the parent product
    pub product_title: String,
}

/// Overrides accepted when creating an order
#[derive(Debug, Clone, Default)]
pub struct CreateOrderOptions {
    /// Use this order number instead of generating one
    pub order_number: Option<String>,

    /// Passthrough shipping data, usually absent
    pub shipping_lines: Option<Value>,

    pub shipment_method_requested: Option<String>,
}

/// Builds the line item for a variant
pub fn variant_line_item(variant: &ProductVariant, quantity: i64) -> LineItem {
    LineItem {
        product_id: Some(variant.product_id),
        merchant_sku_item: Some(variant.sku.clone()),
        size: variant.option1.clone(),
        quantity_requested: Some(quantity),
        item_name: Some(variant.product_title.clone()),
        sell_price: Some(variant.price),
        product_weight: Some(variant.weight),
        extra: Map::new(),
    }
}
