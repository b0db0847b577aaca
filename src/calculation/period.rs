//! Date-range arithmetic shared by the settlement calculators.
//!
//! This module provides inclusive day counting and the clipping of a fixed
//! annual cycle to an employment window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar date range.
///
/// # Example
///
/// ```
/// use settlement_engine::calculation::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
/// );
/// assert_eq!(range.inclusive_days(), 15);
/// assert!(range.contains(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range; callers guarantee `end >= start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Number of days in the range, counting both ends.
    pub fn inclusive_days(&self) -> i64 {
        inclusive_days(self.start, self.end)
    }

    /// Checks if a date falls within the range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// Returns the number of days from `start` to `end`, counting both ends.
///
/// Callers guarantee `end >= start`, so the result is at least 1.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Intersects an annual cycle with an employment window.
///
/// Returns `None` when the two ranges do not overlap, which callers treat as
/// a non-applicable component with a zero amount.
///
/// # Examples
///
/// ```
/// use settlement_engine::calculation::clip_period;
/// use chrono::NaiveDate;
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
///
/// let clipped =
///     clip_period(d(2023, 7, 1), d(2024, 6, 30), d(2024, 1, 15), d(2024, 3, 31)).unwrap();
/// assert_eq!(clipped.start, d(2024, 1, 15));
/// assert_eq!(clipped.end, d(2024, 3, 31));
///
/// let after = clip_period(d(2023, 12, 1), d(2024, 11, 30), d(2024, 12, 1), d(2024, 12, 20));
/// assert!(after.is_none());
/// ```
pub fn clip_period(
    period_start: NaiveDate,
    period_end: NaiveDate,
    employment_start: NaiveDate,
    employment_end: NaiveDate,
) -> Option<DateRange> {
    let start = period_start.max(employment_start);
    let end = period_end.min(employment_end);

    if end < start {
        return None;
    }
    Some(DateRange::new(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// PU-001: single day counts as one
    #[test]
    fn test_same_day_is_one_day() {
        assert_eq!(inclusive_days(d(2024, 5, 10), d(2024, 5, 10)), 1);
    }

    /// PU-002: full common year
    #[test]
    fn test_full_common_year() {
        assert_eq!(inclusive_days(d(2023, 1, 1), d(2023, 12, 31)), 365);
    }

    /// PU-003: full leap year
    #[test]
    fn test_full_leap_year() {
        assert_eq!(inclusive_days(d(2024, 1, 1), d(2024, 12, 31)), 366);
    }

    /// PU-004: employment strictly inside the cycle keeps its own bounds
    #[test]
    fn test_employment_inside_cycle() {
        let clipped = clip_period(d(2023, 12, 1), d(2024, 11, 30), d(2024, 2, 1), d(2024, 4, 30))
            .unwrap();
        assert_eq!(clipped, DateRange::new(d(2024, 2, 1), d(2024, 4, 30)));
        assert_eq!(clipped.inclusive_days(), 90);
    }

    /// PU-005: employment covering the whole cycle yields the cycle
    #[test]
    fn test_employment_contains_cycle() {
        let clipped = clip_period(d(2023, 7, 1), d(2024, 6, 30), d(2010, 1, 1), d(2024, 12, 31))
            .unwrap();
        assert_eq!(clipped, DateRange::new(d(2023, 7, 1), d(2024, 6, 30)));
        assert_eq!(clipped.inclusive_days(), 366);
    }

    /// PU-006: employment starting before and ending inside the cycle
    #[test]
    fn test_employment_overlaps_cycle_start() {
        let clipped = clip_period(d(2023, 7, 1), d(2024, 6, 30), d(2022, 3, 1), d(2023, 7, 31))
            .unwrap();
        assert_eq!(clipped, DateRange::new(d(2023, 7, 1), d(2023, 7, 31)));
        assert_eq!(clipped.inclusive_days(), 31);
    }

    /// PU-007: employment starting exactly on the cycle start
    #[test]
    fn test_employment_starts_on_cycle_start() {
        let clipped = clip_period(d(2023, 12, 1), d(2024, 11, 30), d(2023, 12, 1), d(2024, 1, 31))
            .unwrap();
        assert_eq!(clipped.start, d(2023, 12, 1));
        assert_eq!(clipped.inclusive_days(), 62);
    }

    /// PU-008: employment ending exactly on the cycle end
    #[test]
    fn test_employment_ends_on_cycle_end() {
        let clipped = clip_period(d(2023, 12, 1), d(2024, 11, 30), d(2024, 11, 1), d(2024, 11, 30))
            .unwrap();
        assert_eq!(clipped.end, d(2024, 11, 30));
        assert_eq!(clipped.inclusive_days(), 30);
    }

    /// PU-009: a one-day overlap on the last cycle day
    #[test]
    fn test_single_day_overlap_on_cycle_end() {
        let clipped = clip_period(d(2023, 7, 1), d(2024, 6, 30), d(2024, 6, 30), d(2024, 8, 15))
            .unwrap();
        assert_eq!(clipped, DateRange::new(d(2024, 6, 30), d(2024, 6, 30)));
        assert_eq!(clipped.inclusive_days(), 1);
    }

    /// PU-010: employment entirely after the cycle
    #[test]
    fn test_employment_after_cycle_is_none() {
        assert!(
            clip_period(d(2023, 12, 1), d(2024, 11, 30), d(2024, 12, 1), d(2024, 12, 31)).is_none()
        );
    }

    /// PU-011: employment entirely before the cycle
    #[test]
    fn test_employment_before_cycle_is_none() {
        assert!(
            clip_period(d(2023, 7, 1), d(2024, 6, 30), d(2023, 1, 1), d(2023, 6, 30)).is_none()
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = DateRange::new(d(2024, 1, 1), d(2024, 1, 31));
        assert!(range.contains(d(2024, 1, 1)));
        assert!(range.contains(d(2024, 1, 31)));
        assert!(!range.contains(d(2023, 12, 31)));
        assert!(!range.contains(d(2024, 2, 1)));
    }
}
