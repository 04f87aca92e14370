//! Booking endpoints

mod cancel;
mod create;
mod get;
mod list;
mod status;

pub use cancel::cancel_booking;
pub use create::create_booking;
pub use get::booking_by_id;
pub use list::{all_bookings, my_bookings};
pub use status::update_booking_status;
