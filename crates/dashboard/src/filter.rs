//! Shipment filtering.

use velocity_shipments::ShipmentRecord;

use crate::criteria::FilterCriteria;

/// Reduce the full record set to those matching `criteria`.
///
/// Pure function of its inputs; the result is a subsequence of `records`
/// preserving the original relative order. A record matches when its status
/// passes the status filter AND its creation date falls inside the
/// (inclusive, day-granularity) date range.
pub fn filter_records(records: &[ShipmentRecord], criteria: &FilterCriteria) -> Vec<ShipmentRecord> {
    records
        .iter()
        .filter(|record| {
            criteria.status.matches(record.status)
                && criteria.date_range.contains(record.created_at.date_naive())
        })
        .cloned()
        .collect()
}
