//! Booking status administration endpoint

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use hostly_core::domain::entities::user::UserRole;
use hostly_core::repositories::{BookingRepository, RoomRepository};
use hostly_shared::types::response::ApiResponse;

use crate::dto::{BookingResponse, UpdateStatusRequest};
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// PATCH /api/v1/bookings/{id}/status
///
/// Overwrites a booking's status. Administrators only; any known status
/// may be set regardless of the current one.
pub async fn update_booking_status<B, R>(
    state: web::Data<AppState<B, R>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateStatusRequest>,
) -> HttpResponse
where
    B: BookingRepository + 'static,
    R: RoomRepository + 'static,
{
    if auth.role != UserRole::Admin {
        tracing::warn!(
            user_id = %auth.user_id,
            role = ?auth.role,
            "status update denied"
        );
        return HttpResponse::Forbidden().json(ApiResponse::<()>::error(
            "FORBIDDEN",
            "Only administrators may update booking status",
        ));
    }

    let request = payload.into_inner();
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error(
            "VALIDATION_ERROR",
            format!("Invalid request: {}", errors),
        ));
    }

    match state
        .booking_service
        .update_booking_status(path.into_inner(), &request.status)
        .await
    {
        Ok(booking) => {
            HttpResponse::Ok().json(ApiResponse::success(BookingResponse::from(booking)))
        }
        Err(e) => domain_error_response(&e),
    }
}
