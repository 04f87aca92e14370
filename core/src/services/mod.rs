//! Business services containing domain logic and use cases.

pub mod booking;

// Re-export commonly used types
pub use booking::{calculate_total_price, BookingService, BookingServiceConfig};
