//! Booking creation endpoint

use actix_web::{web, HttpResponse};

use hostly_core::repositories::{BookingRepository, RoomRepository};
use hostly_shared::types::response::ApiResponse;

use crate::dto::{BookingResponse, CreateBookingRequest};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// POST /api/v1/bookings
///
/// Creates a pending booking for the authenticated user. Responds 404
/// for an unknown room, 400 for a malformed date range and 409 when the
/// room is taken for an overlapping stay.
pub async fn create_booking<B, R>(
    state: web::Data<AppState<B, R>>,
    auth: AuthContext,
    payload: web::Json<CreateBookingRequest>,
) -> HttpResponse
where
    B: BookingRepository + 'static,
    R: RoomRepository + 'static,
{
    let request = payload.into_inner();

    match state
        .booking_service
        .create_booking(
            request.room_id,
            request.check_in,
            request.check_out,
            auth.user_id,
        )
        .await
    {
        Ok(booking) => {
            HttpResponse::Created().json(ApiResponse::success(BookingResponse::from(booking)))
        }
        Err(e) => domain_error_response(&e),
    }
}
