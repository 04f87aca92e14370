//! Application factory.
//!
//! Builds the actix-web `App` from shared state and configuration. Kept
//! generic over the repository types so integration tests can run the
//! full HTTP stack against in-memory repositories.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, Error, HttpResponse};
use tracing_actix_web::TracingLogger;

use hostly_core::repositories::{BookingRepository, RoomRepository};
use hostly_shared::config::JwtConfig;
use hostly_shared::types::response::ApiResponse;

use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{bookings, health, rooms, AppState};

/// Build the application with all routes and middleware
pub fn create_app<B, R>(
    state: web::Data<AppState<B, R>>,
    jwt_config: JwtConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    B: BookingRepository + 'static,
    R: RoomRepository + 'static,
{
    App::new()
        .app_data(state)
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health::health))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/bookings")
                        .wrap(JwtAuth::new(jwt_config.clone()))
                        .route("", web::post().to(bookings::create_booking::<B, R>))
                        .route("", web::get().to(bookings::my_bookings::<B, R>))
                        // "/all" must register before "/{id}"
                        .route("/all", web::get().to(bookings::all_bookings::<B, R>))
                        .route("/{id}", web::get().to(bookings::booking_by_id::<B, R>))
                        .route(
                            "/{id}/cancel",
                            web::post().to(bookings::cancel_booking::<B, R>),
                        )
                        .route(
                            "/{id}/status",
                            web::patch().to(bookings::update_booking_status::<B, R>),
                        ),
                )
                .service(
                    web::scope("/rooms")
                        .wrap(JwtAuth::new(jwt_config))
                        .route(
                            "/{id}/availability",
                            web::get().to(rooms::room_availability::<B, R>),
                        ),
                ),
        )
        .default_service(web::route().to(|| async {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(
                "NOT_FOUND",
                "The requested resource does not exist",
            ))
        }))
}
