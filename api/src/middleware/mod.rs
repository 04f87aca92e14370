//! Middleware components for the API layer

pub mod auth;
pub mod cors;

pub use auth::{AuthContext, Claims, JwtAuth};
pub use cors::create_cors;
