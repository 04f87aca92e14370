//! The availability & booking engine.
//!
//! Given a room and a requested date range, the service decides whether an
//! existing reservation conflicts, computes stay pricing, and drives the
//! booking lifecycle, enforcing ownership and role access along the way.

pub mod config;
pub mod pricing;
pub mod service;

#[cfg(test)]
mod tests;

pub use config::BookingServiceConfig;
pub use pricing::calculate_total_price;
pub use service::BookingService;
