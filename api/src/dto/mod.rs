//! Request and response data transfer objects

pub mod booking;

pub use booking::{
    AvailabilityQuery, AvailabilityResponse, BookingDetailsResponse, BookingResponse,
    CreateBookingRequest, OwnerResponse, RoomSummary, UpdateStatusRequest,
};
