//! # Hostly Core
//!
//! Core business logic and domain layer for the Hostly backend.
//! This crate contains domain entities, the booking service, repository
//! interfaces, and error types that form the foundation of the application
//! architecture. It has no storage-engine or transport dependency; the
//! `infra` and `api` crates plug into the traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use errors::{DomainError, DomainResult};
pub use repositories::{BookingRepository, RoomRepository};
pub use services::booking::{BookingService, BookingServiceConfig};
