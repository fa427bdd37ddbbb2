//! Shipment domain module.
//!
//! This crate contains the shipment record model and its lifecycle rules,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no
//! storage).

pub mod record;
pub mod source;
pub mod status;
pub mod tracking;

pub use record::ShipmentRecord;
pub use source::{InMemoryShipmentSource, ShipmentSource};
pub use status::ShipmentStatus;
pub use tracking::TrackingNumber;
