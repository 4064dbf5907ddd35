//! Warehouse CSV schema
//!
//! The warehouse ingests a fixed set of columns in a fixed order. Most of
//! them are filled in manually downstream and are always written blank.

/// Header row, in output order
pub const CSV_HEADERS: [&str; 59] = [
    "order_number",
    "groupon_number",
    "order_date",
    "merchant_sku_item",
    "quantity_requested",
    "shipment_method_requested",
    "shipment_address_name",
    "shipment_address_street",
    "shipment_address_street_2",
    "shipment_address_city",
    "shipment_address_state",
    "shipment_address_postal_code",
    "shipment_address_country",
    "gift",
    "gift_message",
    "quantity_shipped",
    "shipment_carrier",
    "shipment_method",
    "shipment_tracking_number",
    "ship_date",
    "groupon_sku",
    "custom_field_value",
    "permalink",
    "item_name",
    "vendor_id",
    "salesforce_deal_option_id",
    "groupon_cost",
    "billing_address_name",
    "billing_address_street",
    "billing_address_city",
    "billing_address_state",
    "billing_address_postal_code",
    "billing_address_country",
    "purchase_order_number",
    "product_weight",
    "product_weight_unit",
    "product_length",
    "product_width",
    "product_height",
    "product_dimension_unit",
    "customer_phone",
    "incoterms",
    "hts_code",
    "3pl_name",
    "3pl_warehouse_location",
    "kitting_details",
    "sell_price",
    "deal_opportunity_id",
    "shipment_strategy",
    "fulfillment_method",
    "country_of_origin",
    "merchant_permalink",
    "feature_start_date",
    "feature_end_date",
    "bom_sku",
    "payment_method",
    "color_code",
    "tax_rate",
    "tax_price",
];

/// `order_date` format: `MM/DD/YYYY HH:MM`, 24-hour clock
pub const CSV_DATE_FMT: &str = "%m/%d/%Y %H:%M";

/// Position of `column` in the header row
pub fn column_index(column: &str) -> Option<usize> {
    CSV_HEADERS.iter().position(|h| *h == column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_headers_are_unique() {
        let unique: HashSet<&str> = CSV_HEADERS.iter().copied().collect();
        assert_eq!(unique.len(), CSV_HEADERS.len());
    }

    #[test]
    fn test_header_order_anchors() {
        assert_eq!(CSV_HEADERS[0], "order_number");
        assert_eq!(column_index("order_date"), Some(2));
        assert_eq!(column_index("3pl_name"), Some(43));
        assert_eq!(CSV_HEADERS[CSV_HEADERS.len() - 1], "tax_price");
        assert_eq!(column_index("not_a_column"), None);
    }
}
