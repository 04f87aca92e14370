//! Booking listing endpoints

use actix_web::{web, HttpResponse};

use hostly_core::repositories::{BookingRepository, RoomRepository};
use hostly_shared::types::response::ApiResponse;

use crate::dto::BookingDetailsResponse;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// GET /api/v1/bookings
///
/// The authenticated user's own bookings, joined with their rooms,
/// newest first.
pub async fn my_bookings<B, R>(
    state: web::Data<AppState<B, R>>,
    auth: AuthContext,
) -> HttpResponse
where
    B: BookingRepository + 'static,
    R: RoomRepository + 'static,
{
    match state.booking_service.user_bookings(auth.user_id).await {
        Ok(bookings) => HttpResponse::Ok().json(ApiResponse::success(
            bookings
                .into_iter()
                .map(BookingDetailsResponse::from)
                .collect::<Vec<_>>(),
        )),
        Err(e) => domain_error_response(&e),
    }
}

/// GET /api/v1/bookings/all
///
/// Every booking in the system, with rooms and owners. Managers and
/// administrators only.
pub async fn all_bookings<B, R>(
    state: web::Data<AppState<B, R>>,
    auth: AuthContext,
) -> HttpResponse
where
    B: BookingRepository + 'static,
    R: RoomRepository + 'static,
{
    if !auth.role.can_access_any_booking() {
        tracing::warn!(
            user_id = %auth.user_id,
            role = ?auth.role,
            "all-bookings listing denied"
        );
        return HttpResponse::Forbidden().json(ApiResponse::<()>::error(
            "FORBIDDEN",
            "You do not have access to the full booking list",
        ));
    }

    match state.booking_service.all_bookings().await {
        Ok(bookings) => HttpResponse::Ok().json(ApiResponse::success(
            bookings
                .into_iter()
                .map(BookingDetailsResponse::from)
                .collect::<Vec<_>>(),
        )),
        Err(e) => domain_error_response(&e),
    }
}
