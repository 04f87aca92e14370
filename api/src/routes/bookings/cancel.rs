//! Booking cancellation endpoint

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use hostly_core::domain::entities::user::Requester;
use hostly_core::repositories::{BookingRepository, RoomRepository};
use hostly_shared::types::response::ApiResponse;

use crate::dto::BookingResponse;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// POST /api/v1/bookings/{id}/cancel
///
/// Cancels a booking before its check-in date. Responds 409 once the
/// check-in date has passed, 403 when the requester neither owns the
/// booking nor holds a privileged role.
pub async fn cancel_booking<B, R>(
    state: web::Data<AppState<B, R>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    B: BookingRepository + 'static,
    R: RoomRepository + 'static,
{
    let requester = Requester::new(auth.user_id, auth.role);

    match state
        .booking_service
        .cancel_booking(path.into_inner(), &requester)
        .await
    {
        Ok(booking) => {
            HttpResponse::Ok().json(ApiResponse::success(BookingResponse::from(booking)))
        }
        Err(e) => domain_error_response(&e),
    }
}
