//! Liveness endpoint

use actix_web::HttpResponse;

use hostly_shared::types::response::{ApiResponse, HealthResponse};

/// GET /health
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(HealthResponse::healthy(
        "hostly_api",
        env!("CARGO_PKG_VERSION"),
    )))
}
