//! Domain entities representing core business objects.

pub mod booking;
pub mod room;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus};
pub use room::Room;
pub use user::{BookingOwner, Requester, UserRole};
