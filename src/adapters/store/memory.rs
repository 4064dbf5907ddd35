//! In-memory order store

use super::traits::{assign_missing_ids, mark_records, next_record_id, OrderRepository};
use crate::domain::ids::RecordId;
use crate::domain::order::{OrderLineItem, OrderRecord};
use crate::domain::Result;
use chrono::{DateTime, Utc};

/// Order store held in a `Vec`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<OrderRecord>,
}

impl MemoryStore {
    /// Create a store seeded with `records`
    ///
    /// Records without an id are given one.
    pub fn new(mut records: Vec<OrderRecord>) -> Self {
        assign_missing_ids(&mut records);
        Self { records }
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }
}

impl OrderRepository for MemoryStore {
    fn all(&self) -> Result<Vec<OrderRecord>> {
        Ok(self.records.clone())
    }

    fn insert(&mut self, order: OrderLineItem) -> Result<()> {
        let mut record = OrderRecord::from(order);
        record.id = Some(next_record_id(&self.records));
        self.records.push(record);
        Ok(())
    }

    fn mark_uploaded(&mut self, ids: &[RecordId], at: DateTime<Utc>) -> Result<usize> {
        Ok(mark_records(&mut self.records, ids, at))
    }
}
