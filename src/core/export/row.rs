//! Order → CSV row mapping
//!
//! Builds the column → value mapping for one order. Only the columns this
//! system knows how to fill are present in the mapping; every other header
//! column is emitted blank.

use super::columns::{CSV_DATE_FMT, CSV_HEADERS};
use crate::domain::order::OrderLineItem;
use std::collections::HashMap;

/// Column → value mapping for one order
pub type RowMapping = HashMap<&'static str, String>;

/// Builds the row mapping for an order
///
/// `quantity_requested` is always `1` and `gift` always `FALSE`, whatever
/// the line item says: each exported row ships a single unit.
pub fn row_mapping(order: &OrderLineItem) -> RowMapping {
    let billing = order.billing_address();
    let shipping = order.shipping_address();
    let line_item = order.line_item();

    let mut row = RowMapping::new();
    let mut set = |column: &'static str, value: Option<String>| {
        row.insert(column, value.unwrap_or_default());
    };

    set("order_number", Some(order.name().to_string()));
    set(
        "order_date",
        order
            .processed_at()
            .map(|at| at.format(CSV_DATE_FMT).to_string()),
    );
    set(
        "customer_phone",
        billing.field("phone").map(|phone| digits_only(&phone)),
    );
    set("sell_price", line_item.sell_price.map(format_price));
    set("quantity_requested", Some("1".to_string()));
    set("merchant_sku_item", line_item.merchant_sku_item.clone());
    set("product_weight", line_item.product_weight.map(|w| w.to_string()));
    set("item_name", line_item.item_name.clone());

    set("billing_address_name", billing.field("name"));
    set("billing_address_street", billing.field("address1"));
    set("billing_address_city", billing.field("city"));
    set("billing_address_postal_code", billing.field("zip"));
    set("billing_address_state", billing.field("province_code"));
    set("billing_address_country", billing.field("country_code"));

    set(
        "shipment_address_name",
        Some(format!(
            "{} {}",
            shipping.field("first_name").unwrap_or_default(),
            shipping.field("last_name").unwrap_or_default()
        )),
    );
    set("shipment_address_street", shipping.field("address1"));
    set("shipment_address_street_2", shipping.field("address2"));
    set("shipment_address_city", shipping.field("city"));
    set("shipment_address_postal_code", shipping.field("zip"));
    set("shipment_address_state", shipping.field("province_code"));
    set("shipment_address_country", shipping.field("country_code"));
    set(
        "shipment_method_requested",
        Some(order.shipment_method_requested().to_string()),
    );
    set("gift", Some("FALSE".to_string()));

    row
}

/// Lays a mapping out in header order, blank for unmapped columns
pub fn to_record(row: &RowMapping) -> Vec<String> {
    CSV_HEADERS
        .iter()
        .map(|column| row.get(column).cloned().unwrap_or_default())
        .collect()
}

fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Prices always carry a decimal point (`24.0`, `19.99`)
fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 {
        format!("{price:.1}")
    } else {
        price.to_string()
    }
}
