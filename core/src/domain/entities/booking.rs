//! Booking entity representing a reservation of one room for a date
//! interval.
//!
//! Bookings are never deleted. Every state change is a status transition,
//! so the booking table doubles as an append-only audit trail.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::value_objects::stay_dates::StayDates;
use crate::errors::DomainError;

/// Lifecycle status of a booking
///
/// `Pending` and `Confirmed` bookings are *active*: they occupy the room
/// for conflict purposes. `Canceled` and `Completed` bookings are inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Created after a successful availability check, awaiting confirmation
    Pending,
    /// Confirmed by staff
    Confirmed,
    /// Canceled by the owner or an admin before check-in
    Canceled,
    /// Stay finished
    Completed,
}

impl BookingStatus {
    /// String form used in the database and over the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Canceled => "canceled",
            BookingStatus::Completed => "completed",
        }
    }

    /// Whether a booking in this status occupies the room
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Pending | BookingStatus::Confirmed)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "canceled" => Ok(BookingStatus::Canceled),
            "completed" => Ok(BookingStatus::Completed),
            other => Err(DomainError::validation(format!(
                "Invalid booking status: {}",
                other
            ))),
        }
    }
}

/// A reservation of one room for a date interval, owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Unique identifier for the booking
    pub id: Uuid,

    /// The reserved room
    pub room_id: Uuid,

    /// The owning user (the creator, for access-control purposes)
    pub user_id: Uuid,

    /// Start of the stay
    pub check_in: DateTime<Utc>,

    /// End of the stay
    pub check_out: DateTime<Utc>,

    /// Nightly price times the ceiling of the stay length in days
    pub total_price: f64,

    /// Lifecycle status
    pub status: BookingStatus,

    /// Timestamp when the booking was created
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a new pending booking for a validated stay
    pub fn new_pending(room_id: Uuid, user_id: Uuid, stay: &StayDates, total_price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            room_id,
            user_id,
            check_in: stay.check_in(),
            check_out: stay.check_out(),
            total_price,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Whether this booking occupies its room for conflict purposes
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Whether this booking's interval conflicts with a requested stay.
    ///
    /// With `include_boundaries` the test treats a shared boundary date as a
    /// conflict (a booking ending exactly on the requested check-in blocks
    /// it); without it only true overlaps count, allowing same-day turnover.
    pub fn conflicts_with(&self, stay: &StayDates, include_boundaries: bool) -> bool {
        let (start, end) = (stay.check_in(), stay.check_out());
        if include_boundaries {
            (self.check_in >= start && self.check_in <= end)
                || (self.check_out >= start && self.check_out <= end)
                || (self.check_in <= start && self.check_out >= end)
        } else {
            self.check_in < end && self.check_out > start
        }
    }

    /// Whether the owner identified by `user_id` created this booking
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(n: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1 + n as u32, 12, 0, 0).unwrap()
    }

    fn stay(from: i64, to: i64) -> StayDates {
        StayDates::new(day(from), day(to)).unwrap()
    }

    #[test]
    fn test_status_string_round_trip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Canceled,
            BookingStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        let err = "refunded".parse::<BookingStatus>().unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&BookingStatus::Canceled).unwrap();
        assert_eq!(json, "\"canceled\"");
    }

    #[test]
    fn test_new_pending_booking() {
        let booking = Booking::new_pending(Uuid::new_v4(), Uuid::new_v4(), &stay(0, 3), 300.0);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(booking.is_active());
        assert_eq!(booking.total_price, 300.0);
    }

    #[test]
    fn test_conflict_with_contained_interval() {
        let booking = Booking::new_pending(Uuid::new_v4(), Uuid::new_v4(), &stay(0, 5), 500.0);
        assert!(booking.conflicts_with(&stay(1, 3), true));
        assert!(booking.conflicts_with(&stay(1, 3), false));
    }

    #[test]
    fn test_boundary_touch_is_policy_dependent() {
        // Existing stay ends exactly when the requested stay begins.
        let booking = Booking::new_pending(Uuid::new_v4(), Uuid::new_v4(), &stay(0, 2), 200.0);
        assert!(booking.conflicts_with(&stay(2, 4), true));
        assert!(!booking.conflicts_with(&stay(2, 4), false));
    }

    #[test]
    fn test_disjoint_intervals_never_conflict() {
        let booking = Booking::new_pending(Uuid::new_v4(), Uuid::new_v4(), &stay(0, 2), 200.0);
        assert!(!booking.conflicts_with(&stay(3, 5), true));
        assert!(!booking.conflicts_with(&stay(3, 5), false));
    }
}
