//! Interactive query session: criteria state + composed view.

use tracing::debug;

use velocity_shipments::{ShipmentRecord, ShipmentStatus};

use crate::criteria::{DateRange, FilterCriteria, SortCriteria, SortField, SortOrder, StatusFilter};
use crate::filter::filter_records;
use crate::sort::sort_records;
use crate::stats::{AggregateStats, aggregate};

/// Mutable filter/sort state owned by one interactive view.
///
/// Each setter corresponds to exactly one UI input (status select, date-range
/// pickers, sort-header click, reset button). The session holds no records;
/// the externally-owned set is passed in per query, so the composed view is
/// always recomputed from current inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuerySession {
    filter: FilterCriteria,
    sort: SortCriteria,
}

impl QuerySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_criteria(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort_criteria(&self) -> &SortCriteria {
        &self.sort
    }

    /// Status-select input.
    pub fn set_status_filter(&mut self, status: StatusFilter) {
        debug!(?status, "status filter changed");
        self.filter.status = status;
    }

    /// Convenience for the select's concrete options.
    pub fn set_status_only(&mut self, status: ShipmentStatus) {
        self.set_status_filter(StatusFilter::Only(status));
    }

    /// Date-range picker input.
    pub fn set_date_range(&mut self, range: DateRange) {
        debug!(?range, "date range changed");
        self.filter.date_range = range;
    }

    /// Sort-header click with an explicit direction.
    pub fn set_sort(&mut self, field: SortField, order: SortOrder) {
        debug!(?field, ?order, "sort criteria changed");
        self.sort = SortCriteria::new(field, order);
    }

    pub fn set_sort_field(&mut self, field: SortField) {
        self.set_sort(field, self.sort.order);
    }

    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.set_sort(self.sort.field, order);
    }

    /// Reset button: both criteria back to defaults in one step.
    /// Idempotent.
    pub fn reset(&mut self) {
        debug!("query session reset to defaults");
        self.filter = FilterCriteria::default();
        self.sort = SortCriteria::default();
    }

    /// The composed current view: `sort(filter(records))`.
    ///
    /// Fed to the table and card-grid renderers; they receive owned values
    /// and are free to lay them out however they like.
    pub fn view(&self, records: &[ShipmentRecord]) -> Vec<ShipmentRecord> {
        let mut visible = filter_records(records, &self.filter);
        sort_records(&mut visible, &self.sort);
        visible
    }

    /// Stats-panel numbers, always over the FULL record set regardless of
    /// the current filter.
    pub fn stats(&self, records: &[ShipmentRecord]) -> AggregateStats {
        aggregate(records)
    }
}
