//! Single booking read endpoint

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use hostly_core::domain::entities::user::Requester;
use hostly_core::repositories::{BookingRepository, RoomRepository};
use hostly_shared::types::response::ApiResponse;

use crate::dto::BookingDetailsResponse;
use crate::handlers::domain_error_response;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// GET /api/v1/bookings/{id}
///
/// A single booking with its room and owner. Owners see their own
/// bookings; managers and administrators see any.
pub async fn booking_by_id<B, R>(
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
        .booking_by_id(path.into_inner(), &requester)
        .await
    {
        Ok(details) => {
            HttpResponse::Ok().json(ApiResponse::success(BookingDetailsResponse::from(details)))
        }
        Err(e) => domain_error_response(&e),
    }
}
