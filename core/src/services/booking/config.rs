//! Configuration for the booking service

/// Configuration for the booking service
#[derive(Debug, Clone)]
pub struct BookingServiceConfig {
    /// Whether a stay may begin on the same date another booking ends.
    ///
    /// When `false` (the default) the availability check treats interval
    /// boundaries as inclusive: a booking ending exactly on the requested
    /// check-in date blocks the stay, so back-to-back same-day turnover is
    /// disallowed.
    pub allow_same_day_turnover: bool,
}

impl Default for BookingServiceConfig {
    fn default() -> Self {
        Self {
            allow_same_day_turnover: false,
        }
    }
}

impl BookingServiceConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let allow_same_day_turnover = std::env::var("ALLOW_SAME_DAY_TURNOVER")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            allow_same_day_turnover,
        }
    }

    /// Whether availability checks should treat boundary dates as conflicts
    pub fn include_boundaries(&self) -> bool {
        !self.allow_same_day_turnover
    }
}
