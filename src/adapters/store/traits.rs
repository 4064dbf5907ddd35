//! Order repository trait
//!
//! This module defines the trait order stores must implement to work with
//! the exporter.

use crate::domain::ids::RecordId;
use crate::domain::order::{OrderLineItem, OrderRecord};
use crate::domain::Result;
use chrono::{DateTime, Utc};

/// Storage for order line items
///
/// Stores hand out raw [`OrderRecord`]s because stored data may predate the
/// current validation rules; only validated [`OrderLineItem`]s are accepted
/// for insertion.
pub trait OrderRepository {
    /// Every stored record
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn all(&self) -> Result<Vec<OrderRecord>>;

    /// Records with no `uploaded_at`
    fn pending(&self) -> Result<Vec<OrderRecord>> {
        Ok(self
            .all()?
            .into_iter()
            .filter(OrderRecord::is_pending)
            .collect())
    }

    /// Persist a validated order line item
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn insert(&mut self, order: OrderLineItem) -> Result<()>;

    /// Set `uploaded_at` on the pending records with the given ids
    ///
    /// Records already marked keep their original timestamp. Returns the
    /// number of records updated.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn mark_uploaded(&mut self, ids: &[RecordId], at: DateTime<Utc>) -> Result<usize>;
}

/// Gives every record without an id the next free one, in stored order
pub(crate) fn assign_missing_ids(records: &mut [OrderRecord]) {
    let mut next = next_record_id(records);
    for record in records.iter_mut().filter(|r| r.id.is_none()) {
        record.id = Some(next);
        next = next.next();
    }
}

/// One past the highest id in use
pub(crate) fn next_record_id(records: &[OrderRecord]) -> RecordId {
    records
        .iter()
        .filter_map(|r| r.id)
        .max()
        .map_or(RecordId::new(1), |id| id.next())
}

/// Marks the matching pending records in place, returning how many changed
pub(crate) fn mark_records(records: &mut [OrderRecord], ids: &[RecordId], at: DateTime<Utc>) -> usize {
    let mut updated = 0;
    for record in records.iter_mut().filter(|r| r.is_pending()) {
        if record.id.is_some_and(|id| ids.contains(&id)) {
            record.uploaded_at = Some(at);
            updated += 1;
        }
    }
    updated
}
