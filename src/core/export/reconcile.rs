//! Resolving exported rows back to stored records
//!
//! Line items of one order share a name, so a name alone cannot say which
//! of them a CSV contained. A pending record counts as exported when the
//! row it builds today is one of the file's rows. Each file row claims at
//! most one record, lowest id first.

use super::writer::build_row;
use crate::domain::ids::{OrderName, RecordId};
use crate::domain::order::{OrderLineItem, OrderRecord};
use std::collections::HashMap;

/// Ids of the pending records behind `rows`
///
/// Records that fail validation are never matched, since they cannot have
/// produced a row.
pub fn exported_record_ids(
    pending: &[OrderRecord],
    rows: &[Vec<String>],
    require_complete_line_items: bool,
) -> Vec<RecordId> {
    let mut remaining: HashMap<&[String], usize> = HashMap::new();
    for row in rows {
        *remaining.entry(row.as_slice()).or_insert(0) += 1;
    }

    let mut ids = Vec::new();
    for order in valid_by_id(pending, require_complete_line_items) {
        let (Some(id), Ok(row)) = (order.record_id(), build_row(&order)) else {
            continue;
        };
        if let Some(count) = remaining.get_mut(row.as_slice()).filter(|count| **count > 0) {
            *count -= 1;
            ids.push(id);
        }
    }

    if ids.len() < rows.len() {
        tracing::warn!(
            rows = rows.len(),
            matched = ids.len(),
            "Some exported rows match no pending record"
        );
    }
    ids
}

/// Ids of the valid pending records belonging to `names`
pub fn named_record_ids(
    pending: &[OrderRecord],
    names: &[OrderName],
    require_complete_line_items: bool,
) -> Vec<RecordId> {
    valid_by_id(pending, require_complete_line_items)
        .into_iter()
        .filter(|order| names.contains(order.name()))
        .filter_map(|order| order.record_id())
        .collect()
}

fn valid_by_id(pending: &[OrderRecord], require_complete_line_items: bool) -> Vec<OrderLineItem> {
    let mut orders: Vec<OrderLineItem> = pending
        .iter()
        .filter_map(|record| record.validate(require_complete_line_items).ok())
        .collect();
    orders.sort_by_key(OrderLineItem::record_id);
    orders
}
