//! Stay pricing.

use chrono::{DateTime, Utc};

/// Total price for a stay: nightly price times the ceiling of the stay
/// length in whole days, so a partial day counts as a full night.
///
/// Pure function. Zero or negative day counts are not guarded here; callers
/// validate the date range through the availability check.
pub fn calculate_total_price(
    price_per_night: f64,
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
) -> f64 {
    let days = ((check_out - check_in).num_seconds() as f64 / 86_400.0).ceil();
    price_per_night * days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_whole_days() {
        let start = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        assert_eq!(
            calculate_total_price(100.0, start, start + Duration::days(3)),
            300.0
        );
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let start = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).unwrap();
        assert_eq!(
            calculate_total_price(100.0, start, start + Duration::hours(12)),
            100.0
        );
    }
}
