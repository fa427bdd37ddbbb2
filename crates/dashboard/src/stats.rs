//! Aggregate status counts for the stats panel.

use serde::{Deserialize, Serialize};

use velocity_shipments::{ShipmentRecord, ShipmentStatus};

/// Counts of records bucketed by lifecycle stage, plus the overall total.
///
/// Always computed over the FULL record set, never the filtered view: the
/// dashboard totals reflect everything. The three buckets partition the
/// status enum exhaustively, so `total = active + completed + failed` holds
/// for any input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total: usize,
    /// Pending, picked up, in transit, or out for delivery.
    pub active: usize,
    /// Delivered.
    pub completed: usize,
    /// Failed or cancelled.
    pub failed: usize,
}

/// Single-pass aggregation over `records`.
pub fn aggregate(records: &[ShipmentRecord]) -> AggregateStats {
    records
        .iter()
        .fold(AggregateStats::default(), |mut stats, record| {
            stats.total += 1;
            // Exhaustive on purpose: a new status variant must pick a bucket
            // here or this stops compiling.
            match record.status {
                ShipmentStatus::Pending
                | ShipmentStatus::PickedUp
                | ShipmentStatus::InTransit
                | ShipmentStatus::OutForDelivery => stats.active += 1,
                ShipmentStatus::Delivered => stats.completed += 1,
                ShipmentStatus::Failed | ShipmentStatus::Cancelled => stats.failed += 1,
            }
            stats
        })
}
