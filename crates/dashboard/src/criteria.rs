//! User-selected filter and sort criteria.
//!
//! These are the only mutable values in the view model. Input normalization
//! (malformed dates, unknown enum strings) happens here, at the boundary that
//! owns the criteria; the filter and sort functions only ever see valid
//! state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use velocity_shipments::ShipmentStatus;

/// Status predicate: either everything or exactly one status.
///
/// The UI's `all` sentinel becomes a variant rather than a magic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(ShipmentStatus),
}

impl StatusFilter {
    pub fn matches(self, status: ShipmentStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// Calendar-date range; `None` means unbounded on that side.
///
/// Bounds are inclusive. An inverted range (`from > to`) is kept as-is and
/// matches nothing; the bounds are never silently swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Lenient boundary normalizer for raw date-picker strings
    /// (`YYYY-MM-DD`). Unparseable input is treated as "unbounded" on that
    /// side rather than an error, per the view contract.
    pub fn parse(from: &str, to: &str) -> Self {
        Self {
            from: from.parse::<NaiveDate>().ok(),
            to: to.parse::<NaiveDate>().ok(),
        }
    }

    /// Both bounds present and `from` after `to`.
    pub fn is_inverted(&self) -> bool {
        matches!((self.from, self.to), (Some(from), Some(to)) if from > to)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if self.is_inverted() {
            return false;
        }
        if let Some(from) = self.from {
            if date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to {
                return false;
            }
        }
        true
    }
}

/// Predicate narrowing the visible record set: status plus date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub status: StatusFilter,
    pub date_range: DateRange,
}

/// Field a shipment list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Date,
    Status,
    TrackingNumber,
    Amount,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Field + direction determining display order. Defaults to newest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortCriteria {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortCriteria {
    pub fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_unbounded_newest_first() {
        let filter = FilterCriteria::default();
        assert_eq!(filter.status, StatusFilter::All);
        assert_eq!(filter.date_range, DateRange::default());

        let sort = SortCriteria::default();
        assert_eq!(sort.field, SortField::Date);
        assert_eq!(sort.order, SortOrder::Desc);
    }

    #[test]
    fn status_filter_all_matches_everything() {
        for status in ShipmentStatus::ALL {
            assert!(StatusFilter::All.matches(status));
        }
    }

    #[test]
    fn status_filter_only_matches_exactly_one() {
        let only = StatusFilter::Only(ShipmentStatus::Delivered);
        assert!(only.matches(ShipmentStatus::Delivered));
        assert!(!only.matches(ShipmentStatus::Pending));
    }

    #[test]
    fn parse_treats_malformed_input_as_unbounded() {
        let range = DateRange::parse("2024-01-12", "not-a-date");
        assert_eq!(range.from, Some(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap()));
        assert_eq!(range.to, None);

        let range = DateRange::parse("", "");
        assert_eq!(range, DateRange::default());
    }

    #[test]
    fn inclusive_bounds_and_unbounded_sides() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let range = DateRange::new(Some(day(10)), Some(day(20)));

        assert!(range.contains(day(10)));
        assert!(range.contains(day(15)));
        assert!(range.contains(day(20)));
        assert!(!range.contains(day(9)));
        assert!(!range.contains(day(21)));

        let open_start = DateRange::new(None, Some(day(20)));
        assert!(open_start.contains(day(1)));
        assert!(!open_start.contains(day(21)));
    }

    #[test]
    fn inverted_range_contains_nothing() {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        let range = DateRange::new(Some(day(20)), Some(day(10)));
        assert!(range.is_inverted());
        assert!(!range.contains(day(15)));
        assert!(!range.contains(day(10)));
        assert!(!range.contains(day(20)));
    }
}
