//! # Hostly Infrastructure
//!
//! Infrastructure layer providing MySQL implementations of the core
//! repository traits, plus connection-pool management.

pub mod database;

use thiserror::Error;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlBookingRepository, MySqlRoomRepository};

/// Errors raised while setting up infrastructure components
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database connectivity failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
