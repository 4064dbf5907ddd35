//! JSON file order store
//!
//! Keeps every record as one element of a JSON array. Writes go to a
//! sibling temporary file that is renamed over the original, so a failed
//! save never leaves a half-written store. Records stored without an id
//! are numbered on load in file order.

use super::traits::{assign_missing_ids, mark_records, next_record_id, OrderRepository};
use crate::domain::errors::OrderExportError;
use crate::domain::ids::RecordId;
use crate::domain::order::{OrderLineItem, OrderRecord};
use crate::domain::Result;
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Order store backed by a JSON array file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// The file does not need to exist yet; a missing file reads as an
    /// empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` exists but is a directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if path.is_dir() {
            return Err(OrderExportError::Store(format!(
                "Order store path is a directory: {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<OrderRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            OrderExportError::Store(format!(
                "Failed to read order store {}: {}",
                self.path.display(),
                e
            ))
        })?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut records: Vec<OrderRecord> = serde_json::from_str(&contents).map_err(|e| {
            OrderExportError::Store(format!(
                "Failed to parse order store {}: {}",
                self.path.display(),
                e
            ))
        })?;
        assign_missing_ids(&mut records);
        Ok(records)
    }

    fn save(&self, records: &[OrderRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(records)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Order store saved"
        );
        Ok(())
    }
}

impl OrderRepository for JsonFileStore {
    fn all(&self) -> Result<Vec<OrderRecord>> {
        self.load()
    }

    fn insert(&mut self, order: OrderLineItem) -> Result<()> {
        let mut records = self.load()?;
        let mut record = OrderRecord::from(order);
        record.id = Some(next_record_id(&records));
        records.push(record);
        self.save(&records)
    }

    fn mark_uploaded(&mut self, ids: &[RecordId], at: DateTime<Utc>) -> Result<usize> {
        let mut records = self.load()?;
        let updated = mark_records(&mut records, ids, at);
        if updated > 0 {
            self.save(&records)?;
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, InfluencerId, LineItem, OrderName};
    use tempfile::TempDir;

    fn order(name: &str) -> OrderLineItem {
        OrderLineItem::builder()
            .name(OrderName::new(name).unwrap())
            .influencer_id(InfluencerId::new(8))
            .billing_address(Address::new().with("name", "Rae Kim"))
            .shipping_address(Address::new().with("first_name", "Rae"))
            .line_item(LineItem {
                sell_price: Some(12.0),
                ..LineItem::default()
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("orders.json")).unwrap();
        assert!(store.all().unwrap().is_empty());
    }

    #[test]
    fn test_directory_path_is_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(JsonFileStore::open(dir.path()).is_err());
    }

    #[test]
    fn test_insert_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("orders.json");
        let mut store = JsonFileStore::open(&path).unwrap();

        store.insert(order("#INfirst0000")).unwrap();
        store.insert(order("#INsecond000")).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        let records = reopened.all().unwrap();
        assert_eq!(records.len(), 2);
        let validated = records[0].validate(false).unwrap();
        assert_eq!(validated.name(), order("#INfirst0000").name());
        assert_eq!(validated.record_id(), Some(RecordId::new(1)));
        assert_eq!(records[1].id, Some(RecordId::new(2)));
    }

    #[test]
    fn test_mark_uploaded_persists() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.insert(order("#INmarkMe000")).unwrap();

        let id = store.all().unwrap()[0].id.unwrap();
        let updated = store.mark_uploaded(&[id], Utc::now()).unwrap();
        assert_eq!(updated, 1);
        assert!(JsonFileStore::open(&path).unwrap().pending().unwrap().is_empty());
    }

    #[test]
    fn test_records_without_ids_are_numbered_stably() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.json");
        fs::write(&path, r##"[{"name": "#INlegacy0000"}, {"name": "#INlegacy0000"}]"##).unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        let first: Vec<_> = store.all().unwrap().iter().map(|r| r.id).collect();
        let second: Vec<_> = store.all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(first, vec![Some(RecordId::new(1)), Some(RecordId::new(2))]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_file_is_store_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("orders.json");
        fs::write(&path, "{not json").unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        assert!(matches!(store.all(), Err(OrderExportError::Store(_))));
    }
}
