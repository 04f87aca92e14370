//! Repository interfaces decoupling the domain from any storage engine.
//!
//! Concrete implementations live in the `infra` crate; each trait ships an
//! in-memory mock so the booking service can be tested without a database.

pub mod booking;
pub mod room;

pub use booking::{BookingRepository, MockBookingRepository};
pub use room::{MockRoomRepository, RoomRepository};
