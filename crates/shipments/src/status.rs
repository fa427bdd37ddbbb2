//! Shipment status lifecycle.

use serde::{Deserialize, Serialize};

/// Tracking status of a shipment, from creation to a terminal state.
///
/// The happy path advances one step at a time:
/// `Pending → PickedUp → InTransit → OutForDelivery → Delivered`.
/// `Failed` and `Cancelled` are terminal and reachable from any
/// non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Pending,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Failed,
    Cancelled,
}

impl ShipmentStatus {
    /// All statuses in canonical progression order.
    pub const ALL: [ShipmentStatus; 7] = [
        ShipmentStatus::Pending,
        ShipmentStatus::PickedUp,
        ShipmentStatus::InTransit,
        ShipmentStatus::OutForDelivery,
        ShipmentStatus::Delivered,
        ShipmentStatus::Failed,
        ShipmentStatus::Cancelled,
    ];

    /// Canonical ordinal position used wherever statuses are compared or
    /// sorted: `Pending = 0`, `PickedUp = 1`, `InTransit = 2`,
    /// `OutForDelivery = 3`, `Delivered = 4`, `Failed = 5`, `Cancelled = 6`.
    ///
    /// This is an explicit API, not an accident of declaration order; a new
    /// variant must be given a position here.
    pub fn ordinal(self) -> u8 {
        match self {
            ShipmentStatus::Pending => 0,
            ShipmentStatus::PickedUp => 1,
            ShipmentStatus::InTransit => 2,
            ShipmentStatus::OutForDelivery => 3,
            ShipmentStatus::Delivered => 4,
            ShipmentStatus::Failed => 5,
            ShipmentStatus::Cancelled => 6,
        }
    }

    /// A shipment still moving through the network.
    pub fn is_active(self) -> bool {
        matches!(
            self,
            ShipmentStatus::Pending
                | ShipmentStatus::PickedUp
                | ShipmentStatus::InTransit
                | ShipmentStatus::OutForDelivery
        )
    }

    /// Terminal states admit no further transition.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ShipmentStatus::Delivered | ShipmentStatus::Failed | ShipmentStatus::Cancelled
        )
    }

    /// Whether `next` is a legal successor of `self`.
    ///
    /// The happy path moves exactly one ordinal forward; `Failed` and
    /// `Cancelled` are reachable from any non-terminal state.
    pub fn can_transition_to(self, next: ShipmentStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            ShipmentStatus::Failed | ShipmentStatus::Cancelled => true,
            _ => next.ordinal() == self.ordinal() + 1,
        }
    }
}

impl core::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            ShipmentStatus::Pending => "pending",
            ShipmentStatus::PickedUp => "picked_up",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::OutForDelivery => "out_for_delivery",
            ShipmentStatus::Delivered => "delivered",
            ShipmentStatus::Failed => "failed",
            ShipmentStatus::Cancelled => "cancelled",
        };
        f.write_str(label)
    }
}
