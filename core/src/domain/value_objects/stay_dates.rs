//! Validated check-in/check-out date pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

const SECONDS_PER_DAY: i64 = 86_400;

/// A validated stay interval: check-in strictly before check-out.
///
/// Construction is the single place the `check_in < check_out` invariant is
/// enforced, so any `StayDates` in hand is known to be well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayDates {
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
}

impl StayDates {
    /// Creates a validated stay interval.
    ///
    /// Fails with a `Validation` error when `check_in >= check_out`.
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> DomainResult<Self> {
        if check_in >= check_out {
            return Err(DomainError::validation(
                "check-in date must be before check-out date",
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Start of the stay
    pub fn check_in(&self) -> DateTime<Utc> {
        self.check_in
    }

    /// End of the stay
    pub fn check_out(&self) -> DateTime<Utc> {
        self.check_out
    }

    /// Number of billable nights: the ceiling of the stay length in whole
    /// days, so a partial day counts as a full night.
    pub fn nights(&self) -> i64 {
        let seconds = (self.check_out - self.check_in).num_seconds();
        (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = StayDates::new(date(5, 12), date(3, 12)).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn test_rejects_equal_dates() {
        let err = StayDates::new(date(5, 12), date(5, 12)).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn test_whole_day_nights() {
        let stay = StayDates::new(date(1, 12), date(4, 12)).unwrap();
        assert_eq!(stay.nights(), 3);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let stay = StayDates::new(date(1, 12), date(2, 0)).unwrap();
        assert_eq!(stay.nights(), 1);
        let stay = StayDates::new(date(1, 12), date(2, 13)).unwrap();
        assert_eq!(stay.nights(), 2);
    }
}
