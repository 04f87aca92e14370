//! MySQL repository implementations.

pub mod booking_repository_impl;
pub mod room_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use room_repository_impl::MySqlRoomRepository;
