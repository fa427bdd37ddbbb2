//! Externally-owned shipment data source abstraction.
//!
//! The query layer never owns shipment records; it reads whatever the
//! surrounding application has already materialized. The trait keeps that
//! boundary explicit and injectable (no process-wide singleton), and the
//! in-memory implementation stands in for the application's mock arrays in
//! tests and demos.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use velocity_core::ShipmentId;

use crate::record::ShipmentRecord;
use crate::status::ShipmentStatus;
use crate::tracking::TrackingNumber;

/// Supplier of the full, already-materialized shipment record set.
pub trait ShipmentSource: Send + Sync {
    /// Every record, in the source's stable order.
    fn all(&self) -> Vec<ShipmentRecord>;
}

impl<S> ShipmentSource for Arc<S>
where
    S: ShipmentSource + ?Sized,
{
    fn all(&self) -> Vec<ShipmentRecord> {
        (**self).all()
    }
}

/// In-memory shipment source for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct InMemoryShipmentSource {
    records: Vec<ShipmentRecord>,
}

impl InMemoryShipmentSource {
    pub fn new(records: Vec<ShipmentRecord>) -> Self {
        Self { records }
    }

    /// Deterministic fixture set covering every status, with spread-out
    /// creation dates and amounts.
    pub fn sample() -> Self {
        let mk = |seq: u32, status, (y, m, d): (i32, u32, u32), amount: u64, sender: &str, receiver: &str| {
            ShipmentRecord {
                id: ShipmentId::new(),
                tracking_number: TrackingNumber::new(2024, seq)
                    .expect("fixture sequence in range"),
                status,
                created_at: Utc
                    .with_ymd_and_hms(y, m, d, 10, 0, 0)
                    .single()
                    .expect("fixture date valid"),
                amount,
                sender_name: sender.to_string(),
                sender_phone: "+62 812-0000-0001".to_string(),
                receiver_name: receiver.to_string(),
                receiver_phone: "+62 813-0000-0002".to_string(),
            }
        };

        Self::new(vec![
            mk(1, ShipmentStatus::Delivered, (2024, 1, 5), 150_000, "Budi Santoso", "Siti Rahayu"),
            mk(2, ShipmentStatus::Delivered, (2024, 1, 12), 320_000, "Dewi Lestari", "Agus Wijaya"),
            mk(3, ShipmentStatus::InTransit, (2024, 1, 20), 85_000, "Rina Marlina", "Joko Susilo"),
            mk(4, ShipmentStatus::Pending, (2024, 2, 2), 210_000, "Andi Saputra", "Maya Sari"),
            mk(5, ShipmentStatus::PickedUp, (2024, 2, 10), 95_000, "Hendra Gunawan", "Lina Kusuma"),
            mk(6, ShipmentStatus::OutForDelivery, (2024, 2, 18), 430_000, "Tono Prasetyo", "Rudi Hartono"),
            mk(7, ShipmentStatus::Failed, (2024, 3, 1), 60_000, "Sari Indah", "Bambang Putra"),
            mk(8, ShipmentStatus::Cancelled, (2024, 3, 8), 175_000, "Eko Nugroho", "Fitri Handayani"),
        ])
    }
}

impl ShipmentSource for InMemoryShipmentSource {
    fn all(&self) -> Vec<ShipmentRecord> {
        self.records.clone()
    }
}
