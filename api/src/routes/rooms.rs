//! Room availability endpoint

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use hostly_core::repositories::{BookingRepository, RoomRepository};
use hostly_shared::types::response::ApiResponse;

use crate::dto::{AvailabilityQuery, AvailabilityResponse};
use crate::handlers::domain_error_response;
use crate::routes::AppState;

/// GET /api/v1/rooms/{id}/availability
///
/// Reports whether the room is free for the requested stay. Does not
/// reserve anything; a booking created later may still fail with a
/// conflict if another one lands in between.
pub async fn room_availability<B, R>(
    state: web::Data<AppState<B, R>>,
    path: web::Path<Uuid>,
    query: web::Query<AvailabilityQuery>,
) -> HttpResponse
where
    B: BookingRepository + 'static,
    R: RoomRepository + 'static,
{
    let room_id = path.into_inner();
    let query = query.into_inner();

    match state
        .booking_service
        .check_room_availability(room_id, query.check_in, query.check_out)
        .await
    {
        Ok(available) => HttpResponse::Ok().json(ApiResponse::success(AvailabilityResponse {
            room_id,
            check_in: query.check_in,
            check_out: query.check_out,
            available,
        })),
        Err(e) => domain_error_response(&e),
    }
}
