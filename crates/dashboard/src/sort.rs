//! Shipment sorting.

use core::cmp::Ordering;

use velocity_shipments::ShipmentRecord;

use crate::criteria::{SortCriteria, SortField, SortOrder};

/// Compare two records on a single field, ascending.
///
/// One exhaustive match; adding a `SortField` variant fails to compile until
/// a comparator is chosen for it. Status comparison goes through
/// [`velocity_shipments::ShipmentStatus::ordinal`], never the string form.
fn compare_by_field(a: &ShipmentRecord, b: &ShipmentRecord, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.created_at.cmp(&b.created_at),
        SortField::Status => a.status.ordinal().cmp(&b.status.ordinal()),
        SortField::TrackingNumber => a.tracking_number.cmp(&b.tracking_number),
        SortField::Amount => a.amount.cmp(&b.amount),
    }
}

/// Stably sort `records` in place by `criteria`.
///
/// Descending order reverses the comparator, not the final sequence, so
/// equal-key records keep their relative input order in both directions.
pub fn sort_records(records: &mut [ShipmentRecord], criteria: &SortCriteria) {
    records.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, criteria.field);
        match criteria.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
