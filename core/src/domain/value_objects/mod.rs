//! Value objects used across the domain layer.

pub mod booking_details;
pub mod stay_dates;

pub use booking_details::BookingDetails;
pub use stay_dates::StayDates;
