//! # Hostly API
//!
//! HTTP layer for the Hostly backend: actix-web routes, request DTOs,
//! JWT identity middleware, and the mapping from domain errors to HTTP
//! status codes.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
