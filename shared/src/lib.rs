//! Shared utilities and common types for the Hostly server
//!
//! This crate provides functionality used across all server modules:
//! - Configuration types (server, database, auth)
//! - Common API response wrappers

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AppConfig, DatabaseConfig, JwtConfig, ServerConfig};
pub use types::{ApiResponse, HealthResponse};
