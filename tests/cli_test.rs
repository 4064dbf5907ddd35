//! Integration tests for the command-line interface

use clap::Parser;
use order_export::adapters::store::{JsonFileStore, OrderRepository};
use order_export::cli::{Cli, Commands};
use serde_json::json;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path) -> String {
    let path = dir.join("order-export.toml");
    let content = format!(
        "[store]\npath = \"{}\"\n\n[export]\noutput_dir = \"{}\"\n",
        dir.join("orders.json").display(),
        dir.join("outbox").display()
    );
    fs::write(&path, content).unwrap();
    path.to_string_lossy().to_string()
}

fn write_inputs(dir: &Path) -> (String, String) {
    let influencer = dir.join("influencer.json");
    let variant = dir.join("variant.json");
    fs::write(
        &influencer,
        json!({
            "id": 12,
            "billing_address": {"name": "Noa Vale", "phone": "555 010 9999"},
            "shipping_address": {"first_name": "Noa", "last_name": "Vale", "city": "Reno"}
        })
        .to_string(),
    )
    .unwrap();
    fs::write(
        &variant,
        json!({
            "product_id": 8,
            "sku": "BAG-TOTE",
            "option1": null,
            "price": 30.0,
            "weight": 300,
            "product_title": "Tote Bag"
        })
        .to_string(),
    )
    .unwrap();
    (
        influencer.to_string_lossy().to_string(),
        variant.to_string_lossy().to_string(),
    )
}

fn run(args: &[&str]) -> i32 {
    let mut argv = vec!["order-export"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv).execute().unwrap()
}

#[test]
fn test_parse_export_flags() {
    let cli = Cli::parse_from(["order-export", "export", "--dry-run", "--output-dir", "/tmp/x"]);
    match cli.command {
        Commands::Export(args) => {
            assert!(args.dry_run);
            assert_eq!(args.output_dir.as_deref(), Some("/tmp/x"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_mark_uploaded_names() {
    let cli = Cli::parse_from(["order-export", "mark-uploaded", "--names", "#INa,#INb"]);
    match cli.command {
        Commands::MarkUploaded(args) => assert_eq!(args.names, vec!["#INa", "#INb"]),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_mark_uploaded_requires_a_source() {
    assert!(Cli::try_parse_from(["order-export", "mark-uploaded"]).is_err());
    assert!(Cli::try_parse_from([
        "order-export",
        "mark-uploaded",
        "--csv",
        "a.csv",
        "--names",
        "#INa"
    ])
    .is_err());
}

#[test]
fn test_create_export_mark_workflow() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let (influencer, variant) = write_inputs(dir.path());

    let code = run(&[
        "--config",
        &config,
        "create",
        "--influencer",
        &influencer,
        "--variant",
        &variant,
        "--order-number",
        "#INcliFlow0001",
    ]);
    assert_eq!(code, 0);

    assert_eq!(run(&["--config", &config, "export"]), 0);

    let outbox = dir.path().join("outbox");
    let exported: Vec<_> = fs::read_dir(&outbox)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(exported.len(), 1);
    let contents = fs::read_to_string(&exported[0]).unwrap();
    assert!(contents.contains("#INcliFlow0001"));
    assert!(contents.contains("Noa Vale"));

    let csv_path = exported[0].to_string_lossy().to_string();
    assert_eq!(
        run(&["--config", &config, "mark-uploaded", "--csv", &csv_path]),
        0
    );

    let store = JsonFileStore::open(dir.path().join("orders.json")).unwrap();
    assert!(store.pending().unwrap().is_empty());
    assert_eq!(store.all().unwrap().len(), 1);
}

#[test]
fn test_create_rejects_bad_order_number() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    let (influencer, variant) = write_inputs(dir.path());

    let code = run(&[
        "--config",
        &config,
        "create",
        "--influencer",
        &influencer,
        "--variant",
        &variant,
        "--order-number",
        "ORD-99",
    ]);
    assert_eq!(code, 2);
    assert!(!dir.path().join("orders.json").exists());
}

#[test]
fn test_export_dry_run_writes_no_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());

    assert_eq!(run(&["--config", &config, "export", "--dry-run"]), 0);
    assert!(!dir.path().join("outbox").exists());
}

#[test]
fn test_generate_order_number_succeeds() {
    assert_eq!(run(&["generate-order-number", "--count", "2"]), 0);
}

fn seed_siblings(dir: &Path) {
    let line_item = |sku: &str, price: serde_json::Value| {
        json!({
            "name": "#INsibling0000",
            "influencer_id": 4,
            "billing_address": {"name": "Lou Park"},
            "shipping_address": {"first_name": "Lou", "last_name": "Park"},
            "line_item": {"merchant_sku_item": sku, "sell_price": price}
        })
    };
    fs::write(
        dir.join("orders.json"),
        json!([line_item("PIN-1", json!(3.5)), line_item("PIN-2", json!(3))]).to_string(),
    )
    .unwrap();
}

#[test]
fn test_mark_uploaded_from_csv_skips_unexported_sibling() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    seed_siblings(dir.path());

    assert_eq!(run(&["--config", &config, "export"]), 1);
    let exported = fs::read_dir(dir.path().join("outbox"))
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .path();

    let csv_path = exported.to_string_lossy().to_string();
    assert_eq!(run(&["--config", &config, "mark-uploaded", "--csv", &csv_path]), 0);

    let store = JsonFileStore::open(dir.path().join("orders.json")).unwrap();
    let pending = store.pending().unwrap();
    assert_eq!(pending.len(), 1);
    assert!(pending[0].validate(false).is_err());
}

#[test]
fn test_mark_uploaded_by_name_skips_invalid_sibling() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path());
    seed_siblings(dir.path());

    assert_eq!(
        run(&["--config", &config, "mark-uploaded", "--names", "#INsibling0000"]),
        0
    );

    let store = JsonFileStore::open(dir.path().join("orders.json")).unwrap();
    assert_eq!(store.pending().unwrap().len(), 1);
}
