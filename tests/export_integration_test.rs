//! Integration tests for the CSV export pipeline

use chrono::{TimeZone, Utc};
use order_export::adapters::store::{JsonFileStore, MemoryStore, OrderRepository};
use order_export::core::export::{exported_record_ids, CsvExporter, ExportCoordinator, CSV_HEADERS};
use order_export::domain::{
    Address, InfluencerId, LineItem, OrderExportError, OrderLineItem, OrderName, OrderRecord,
};
use regex::Regex;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn column(name: &str) -> usize {
    CSV_HEADERS
        .iter()
        .position(|h| *h == name)
        .unwrap_or_else(|| panic!("unknown column {name}"))
}

fn sample_order(name: &str) -> OrderLineItem {
    OrderLineItem::builder()
        .name(OrderName::new(name).unwrap())
        .influencer_id(InfluencerId::new(42))
        .billing_address(
            Address::new()
                .with("name", "Ana Li")
                .with("address1", "1 Main St")
                .with("city", "Portland")
                .with("zip", "97201")
                .with("province_code", "OR")
                .with("country_code", "US")
                .with("phone", "+1 (555) 123-4567"),
        )
        .shipping_address(
            Address::new()
                .with("first_name", "Ana")
                .with("last_name", "Li")
                .with("address1", "1 Main St")
                .with("city", "Portland")
                .with("zip", "97201")
                .with("province_code", "OR")
                .with("country_code", "US"),
        )
        .line_item(LineItem {
            product_id: Some(7),
            merchant_sku_item: Some("TEE-M".to_string()),
            size: Some("M".to_string()),
            quantity_requested: Some(3),
            item_name: Some("Logo Tee".to_string()),
            sell_price: Some(24.0),
            product_weight: Some(200),
            ..LineItem::default()
        })
        .processed_at(Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 0).unwrap())
        .build()
        .unwrap()
}

fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .unwrap();
    assert_eq!(reader.headers().unwrap().len(), CSV_HEADERS.len());
    reader.records().map(|r| r.unwrap()).collect()
}

#[test]
fn test_zero_orders_writes_header_only() {
    let dir = TempDir::new().unwrap();
    let exporter = CsvExporter::new(dir.path());

    let path = exporter.export(&[]).unwrap();
    let contents = fs::read_to_string(&path).unwrap();

    assert_eq!(contents, format!("{}\n", CSV_HEADERS.join(",")));
}

#[test]
fn test_exported_row_values() {
    let dir = TempDir::new().unwrap();
    let path = CsvExporter::new(dir.path())
        .export(&[sample_order("#INabcdef1234")])
        .unwrap();

    let rows = read_rows(&path);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];

    assert_eq!(&row[column("order_number")], "#INabcdef1234");
    assert_eq!(&row[column("order_date")], "03/01/2024 14:05");
    assert_eq!(&row[column("customer_phone")], "15551234567");
    assert_eq!(&row[column("shipment_address_name")], "Ana Li");
    assert_eq!(&row[column("quantity_requested")], "1");
    assert_eq!(&row[column("gift")], "FALSE");
    assert_eq!(&row[column("sell_price")], "24.0");
    assert_eq!(&row[column("shipment_method_requested")], "GROUND");
    assert_eq!(&row[column("merchant_sku_item")], "TEE-M");
    assert_eq!(&row[column("product_weight")], "200");
    assert_eq!(&row[column("purchase_order_number")], "");
}

#[test]
fn test_non_ascii_values_are_transliterated() {
    let dir = TempDir::new().unwrap();
    let order = OrderLineItem::builder()
        .name(OrderName::new("#INumlaut0000").unwrap())
        .influencer_id(InfluencerId::new(5))
        .billing_address(Address::new().with("name", "Jürgen Müller").with("city", "Köln"))
        .shipping_address(
            Address::new()
                .with("first_name", "Jürgen")
                .with("last_name", "Müller"),
        )
        .line_item(LineItem {
            item_name: Some("Café Crème Mug".to_string()),
            sell_price: Some(12.5),
            ..LineItem::default()
        })
        .build()
        .unwrap();

    let path = CsvExporter::new(dir.path()).export(&[order]).unwrap();
    let bytes = fs::read(&path).unwrap();
    assert!(bytes.is_ascii());

    let rows = read_rows(&path);
    assert_eq!(&rows[0][column("shipment_address_name")], "Jurgen Muller");
    assert_eq!(&rows[0][column("billing_address_city")], "Koln");
    assert_eq!(&rows[0][column("item_name")], "Cafe Creme Mug");
    assert_eq!(&rows[0][column("sell_price")], "12.5");
}

#[test]
fn test_file_name_pattern() {
    let dir = TempDir::new().unwrap();
    let path = CsvExporter::new(dir.path()).export(&[]).unwrap();

    let file_name = path.file_name().unwrap().to_string_lossy().to_string();
    let pattern = Regex::new(r"^Orders_\d{4}_\d{2}_\d{2}_\d{2}_\d{2}_\d{2}_\d{3}\.csv$").unwrap();
    assert!(pattern.is_match(&file_name), "unexpected file name {file_name}");
    assert_eq!(path.parent().unwrap(), dir.path());
}

#[test]
fn test_rows_keep_input_order() {
    let dir = TempDir::new().unwrap();
    let orders = vec![
        sample_order("#INfirst00000"),
        sample_order("#INsecond0000"),
        sample_order("#INthird00000"),
    ];

    let path = CsvExporter::new(dir.path()).export(&orders).unwrap();
    let names: Vec<String> = read_rows(&path)
        .iter()
        .map(|r| r[column("order_number")].to_string())
        .collect();
    assert_eq!(names, vec!["#INfirst00000", "#INsecond0000", "#INthird00000"]);
}

#[test]
fn test_export_then_mark_uploaded_round() {
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("orders.json");
    let mut store = JsonFileStore::open(&store_path).unwrap();
    store.insert(sample_order("#INroundTrip00")).unwrap();

    let mut coordinator = ExportCoordinator::with_store(
        Box::new(JsonFileStore::open(&store_path).unwrap()),
        CsvExporter::new(dir.path().join("out")),
        false,
    );
    let first = coordinator.execute_export(false).unwrap();
    assert_eq!(first.exported, 1);

    // The exporter never marks records itself
    let again = coordinator.execute_export(true).unwrap();
    assert_eq!(again.total_records, 1);

    assert_eq!(coordinator.mark_uploaded(&first, Utc::now()).unwrap(), 1);
    let after = coordinator.execute_export(true).unwrap();
    assert_eq!(after.total_records, 0);
}

#[test]
fn test_invalid_records_are_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let broken: OrderRecord = serde_json::from_value(json!({
        "name": "ORD-1",
        "billing_address": {"name": "X"},
        "shipping_address": {"first_name": "X"},
        "line_item": {"quantity_requested": "two"}
    }))
    .unwrap();
    let good: OrderRecord = sample_order("#INgoodRecord0").into();

    let coordinator = ExportCoordinator::with_store(
        Box::new(MemoryStore::new(vec![broken, good])),
        CsvExporter::new(dir.path()),
        false,
    );
    let summary = coordinator.execute_export(false).unwrap();

    assert_eq!(summary.exported, 1);
    assert_eq!(summary.skipped.len(), 1);
    let errors = &summary.skipped[0].errors;
    assert!(errors.has_field("name"));
    assert!(errors.has_field("line_item"));
    assert!(!summary.is_successful());
}

#[test]
fn test_unmappable_character_aborts_without_file() {
    let dir = TempDir::new().unwrap();
    let order = OrderLineItem::builder()
        .name(OrderName::new("#INprivate0000").unwrap())
        .influencer_id(InfluencerId::new(1))
        .billing_address(Address::new().with("name", "A\u{E000}"))
        .shipping_address(Address::new().with("first_name", "A"))
        .line_item(LineItem::default())
        .build()
        .unwrap();

    let result = CsvExporter::new(dir.path()).export(&[sample_order("#INfine000000"), order]);

    match result {
        Err(OrderExportError::Encoding { column, value }) => {
            assert_eq!(column, "billing_address_name");
            assert_eq!(value, "A\u{E000}");
        }
        other => panic!("expected encoding error, got {other:?}"),
    }
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_output_dir_that_is_a_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("outbox");
    fs::write(&not_a_dir, "occupied").unwrap();

    let result = CsvExporter::new(&not_a_dir).export(&[sample_order("#INblocked0000")]);

    assert!(matches!(result, Err(OrderExportError::Io(_))), "got {result:?}");
    assert_eq!(fs::read_to_string(&not_a_dir).unwrap(), "occupied");
}

#[test]
fn test_marking_from_csv_leaves_skipped_sibling_pending() {
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("orders.json");
    let mut valid: OrderRecord = sample_order("#INshared0000").into();
    valid.id = None;
    let mut invalid = valid.clone();
    if let Some(line_item) = invalid.line_item.as_mut() {
        line_item.insert("sell_price".to_string(), json!(9));
    }
    fs::write(&store_path, serde_json::to_string(&vec![valid, invalid]).unwrap()).unwrap();

    let coordinator = ExportCoordinator::with_store(
        Box::new(JsonFileStore::open(&store_path).unwrap()),
        CsvExporter::new(dir.path().join("out")),
        false,
    );
    let summary = coordinator.execute_export(false).unwrap();
    assert_eq!(summary.exported, 1);
    assert_eq!(summary.skipped.len(), 1);

    let mut reader = csv::Reader::from_path(summary.file.unwrap()).unwrap();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect();

    let mut store = JsonFileStore::open(&store_path).unwrap();
    let ids = exported_record_ids(&store.pending().unwrap(), &rows, false);
    let updated = store.mark_uploaded(&ids, Utc::now()).unwrap();

    assert_eq!(updated, 1);
    let pending = store.pending().unwrap();
    assert_eq!(pending.len(), 1);
    assert!(pending[0].validate(false).is_err());
}
