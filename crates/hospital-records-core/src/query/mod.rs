//! Derived views over borrowed collections.
//!
//! Everything here is a pure function of its inputs and never mutates the
//! store.

mod doctors;
mod notifications;
mod overview;
mod patients;
mod schedule;

pub use doctors::*;
pub use notifications::*;
pub use overview::*;
pub use patients::*;
pub use schedule::*;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Inclusive calendar-date window, interpreted in UTC.
///
/// The end date covers its whole day, through 23:59:59.999.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        if let Some(start) = self.from.and_then(|d| d.and_hms_opt(0, 0, 0)) {
            if at < Utc.from_utc_datetime(&start) {
                return false;
            }
        }
        if let Some(end) = self.to.and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999)) {
            if at > Utc.from_utc_datetime(&end) {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive substring test; an empty needle matches everything.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unbounded_contains_everything() {
        let range = DateRange::default();
        assert!(range.is_unbounded());
        assert!(range.contains(Utc::now()));
    }

    #[test]
    fn test_end_of_day_is_inclusive() {
        let range = DateRange::new(None, Some(day(2024, 3, 15)));
        let last_ms = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 59).unwrap()
            + Duration::milliseconds(999);

        assert!(range.contains(last_ms));
        assert!(!range.contains(last_ms + Duration::milliseconds(1)));
    }

    #[test]
    fn test_start_of_day_is_inclusive() {
        let range = DateRange::new(Some(day(2024, 3, 15)), None);
        let midnight = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();

        assert!(range.contains(midnight));
        assert!(!range.contains(midnight - Duration::milliseconds(1)));
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Kwame Mensah", "mens"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Kwame Mensah", "osei"));
    }
}
