//! Shipment collection view model.
//!
//! Takes the full shipment record set supplied by an external
//! [`velocity_shipments::ShipmentSource`] plus user-selected criteria and
//! produces the derived view consumed by the back-office renderers: the
//! filtered subset, its sort order, and the aggregate status counts.
//!
//! Everything here is a deterministic, synchronous transform; the only
//! mutable state is the criteria held by [`QuerySession`], which is owned by
//! a single interactive view.

pub mod criteria;
pub mod filter;
pub mod session;
pub mod sort;
pub mod stats;

pub use criteria::{DateRange, FilterCriteria, SortCriteria, SortField, SortOrder, StatusFilter};
pub use filter::filter_records;
pub use session::QuerySession;
pub use sort::sort_records;
pub use stats::{AggregateStats, aggregate};
