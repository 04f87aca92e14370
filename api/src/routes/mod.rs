//! Route handlers and shared application state

pub mod bookings;
pub mod health;
pub mod rooms;

use std::sync::Arc;

use hostly_core::repositories::{BookingRepository, RoomRepository};
use hostly_core::services::booking::BookingService;

/// Shared state injected into every handler
pub struct AppState<B, R>
where
    B: BookingRepository,
    R: RoomRepository,
{
    /// The booking service backing all endpoints
    pub booking_service: Arc<BookingService<B, R>>,
}

impl<B, R> AppState<B, R>
where
    B: BookingRepository,
    R: RoomRepository,
{
    /// Create application state around a booking service
    pub fn new(booking_service: Arc<BookingService<B, R>>) -> Self {
        Self { booking_service }
    }
}
