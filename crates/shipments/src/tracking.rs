//! Tracking number value type.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use velocity_core::DomainError;

/// Validated tracking number in the display format `VEL-YYYY-NNNNNN`.
///
/// `YYYY` is the four-digit year the shipment was created, `NNNNNN` a
/// zero-padded sequence number. The format is fixed-width, so lexicographic
/// ordering of tracking numbers matches issuance order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackingNumber(String);

impl TrackingNumber {
    const PREFIX: &'static str = "VEL";
    const MAX_SEQUENCE: u32 = 999_999;

    /// Build a tracking number from its parts.
    pub fn new(year: u16, sequence: u32) -> Result<Self, DomainError> {
        if !(1000..=9999).contains(&year) {
            return Err(DomainError::validation(format!(
                "tracking year must be four digits, got {year}"
            )));
        }
        if sequence == 0 || sequence > Self::MAX_SEQUENCE {
            return Err(DomainError::validation(format!(
                "tracking sequence must be in 1..={}, got {sequence}",
                Self::MAX_SEQUENCE
            )));
        }
        Ok(Self(format!("{}-{year:04}-{sequence:06}", Self::PREFIX)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for TrackingNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TrackingNumber {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let prefix = parts.next().unwrap_or_default();
        let year = parts.next().unwrap_or_default();
        let sequence = parts.next().unwrap_or_default();

        if prefix != Self::PREFIX {
            return Err(DomainError::invalid_id(format!(
                "TrackingNumber: expected prefix {}, got {s:?}",
                Self::PREFIX
            )));
        }
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!(
                "TrackingNumber: malformed year in {s:?}"
            )));
        }
        if sequence.len() != 6 || !sequence.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::invalid_id(format!(
                "TrackingNumber: malformed sequence in {s:?}"
            )));
        }

        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_vel_year_sequence() {
        let tn = TrackingNumber::new(2024, 42).unwrap();
        assert_eq!(tn.to_string(), "VEL-2024-000042");
    }

    #[test]
    fn parses_well_formed_numbers() {
        let tn: TrackingNumber = "VEL-2024-000123".parse().unwrap();
        assert_eq!(tn.as_str(), "VEL-2024-000123");
    }

    #[test]
    fn rejects_wrong_prefix_and_malformed_parts() {
        for bad in [
            "XYZ-2024-000001",
            "VEL-24-000001",
            "VEL-2024-1",
            "VEL-2024-00000A",
            "VEL-2024",
            "",
        ] {
            assert!(
                bad.parse::<TrackingNumber>().is_err(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_parts_on_construction() {
        assert!(TrackingNumber::new(99, 1).is_err());
        assert!(TrackingNumber::new(2024, 0).is_err());
        assert!(TrackingNumber::new(2024, 1_000_000).is_err());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: every constructible tracking number parses back to
            /// itself.
            #[test]
            fn formatted_numbers_always_parse(
                year in 1000u16..=9999,
                sequence in 1u32..=999_999,
            ) {
                let tn = TrackingNumber::new(year, sequence).unwrap();
                let parsed: TrackingNumber = tn.as_str().parse().unwrap();
                prop_assert_eq!(tn, parsed);
            }

            /// Property: string ordering agrees with (year, sequence)
            /// ordering, which is what makes lexicographic tracking-number
            /// sort meaningful.
            #[test]
            fn string_order_matches_component_order(
                a in (1000u16..=9999, 1u32..=999_999),
                b in (1000u16..=9999, 1u32..=999_999),
            ) {
                let lhs = TrackingNumber::new(a.0, a.1).unwrap();
                let rhs = TrackingNumber::new(b.0, b.1).unwrap();
                prop_assert_eq!(lhs.cmp(&rhs), a.cmp(&b));
            }
        }
    }

    #[test]
    fn lexicographic_order_matches_issuance_order() {
        let earlier = TrackingNumber::new(2023, 999_999).unwrap();
        let later = TrackingNumber::new(2024, 1).unwrap();
        assert!(earlier < later);

        let a = TrackingNumber::new(2024, 7).unwrap();
        let b = TrackingNumber::new(2024, 70).unwrap();
        assert!(a < b);
    }
}
