//! CORS configuration.
//!
//! Development defaults to a permissive policy; production builds the
//! allow-list from `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use std::env;

/// Build the CORS middleware from environment settings
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    if environment == "production" {
        let allowed_origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();
        let max_age = env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(3600);

        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PATCH", "DELETE"])
            .allowed_headers(vec!["Authorization", "Content-Type", "Accept"])
            .max_age(max_age);

        for origin in allowed_origins.split(',').filter(|o| !o.trim().is_empty()) {
            cors = cors.allowed_origin(origin.trim());
        }

        cors
    } else {
        Cors::permissive()
    }
}
