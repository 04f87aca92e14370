//! Hostly API server binary

use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing_subscriber::EnvFilter;

use hostly_api::app::create_app;
use hostly_api::routes::AppState;
use hostly_core::services::booking::{BookingService, BookingServiceConfig};
use hostly_infra::{DatabasePool, MySqlBookingRepository, MySqlRoomRepository};
use hostly_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    pool.run_migrations()
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let booking_repository = Arc::new(MySqlBookingRepository::new(pool.get_pool().clone()));
    let room_repository = Arc::new(MySqlRoomRepository::new(pool.get_pool().clone()));
    let booking_service = Arc::new(BookingService::new(
        booking_repository,
        room_repository,
        BookingServiceConfig::from_env(),
    ));

    let state = web::Data::new(AppState::new(booking_service));
    let jwt_config = config.jwt.clone();

    let bind_address = config.server.bind_address();
    tracing::info!(%bind_address, "starting server");

    let mut server = HttpServer::new(move || create_app(state.clone(), jwt_config.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server.bind(&bind_address)?.run().await;
    pool.close().await;
    result
}
