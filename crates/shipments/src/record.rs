//! Shipment record read model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use velocity_core::ShipmentId;

use crate::status::ShipmentStatus;
use crate::tracking::TrackingNumber;

/// One tracked delivery order, as materialized by the owning data source.
///
/// The query layer only reads these; creation, mutation and deletion belong
/// to whatever supplies the [`crate::ShipmentSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentRecord {
    pub id: ShipmentId,
    pub tracking_number: TrackingNumber,
    pub status: ShipmentStatus,
    pub created_at: DateTime<Utc>,
    /// Shipping charge in whole IDR (the currency has no minor unit in use).
    pub amount: u64,
    pub sender_name: String,
    pub sender_phone: String,
    pub receiver_name: String,
    pub receiver_phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serde_roundtrip_preserves_all_fields() {
        let record = ShipmentRecord {
            id: ShipmentId::new(),
            tracking_number: TrackingNumber::new(2024, 17).unwrap(),
            status: ShipmentStatus::InTransit,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
            amount: 250_000,
            sender_name: "Budi Santoso".to_string(),
            sender_phone: "+62 812-3456-7890".to_string(),
            receiver_name: "Siti Rahayu".to_string(),
            receiver_phone: "+62 813-9876-5432".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: ShipmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
