//! Mapping from domain errors to HTTP responses.
//!
//! Domain errors are logged where they are detected; this module only
//! translates them into status codes and the standard response envelope.
//! Database and internal errors are the exception: their detail must not
//! leak to clients, so the body carries a generic message and the detail
//! goes to the log here.

use actix_web::HttpResponse;

use hostly_core::errors::DomainError;
use hostly_shared::types::response::ApiResponse;

/// Translate a domain error into its HTTP response
pub fn domain_error_response(error: &DomainError) -> HttpResponse {
    let code = error.error_code();

    match error {
        DomainError::NotFound { .. } => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(code, error.to_string()))
        }
        DomainError::Validation { .. } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(code, error.to_string()))
        }
        DomainError::Conflict { .. } => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(code, error.to_string()))
        }
        DomainError::Forbidden { .. } => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(code, error.to_string()))
        }
        DomainError::Database { message } | DomainError::Internal { message } => {
            tracing::error!(detail = %message, "request failed with internal error");
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error(code, "An internal error occurred"))
        }
    }
}
