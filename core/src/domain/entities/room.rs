//! Room entity representing a physical hotel room in the catalog.
//!
//! Rooms are read-only as far as the booking engine is concerned: the
//! engine looks up a room to confirm it exists and to read its nightly
//! price. Catalog management lives elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable hotel room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for the room
    pub id: Uuid,

    /// Display name (e.g. "Ocean View 731")
    pub name: String,

    /// Price for one night's stay
    pub price_per_night: f64,

    /// Timestamp when the room was added to the catalog
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Creates a new Room instance
    pub fn new(name: impl Into<String>, price_per_night: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price_per_night,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_room_creation() {
        let room = Room::new("Ocean View 731", 120.0);
        assert_eq!(room.name, "Ocean View 731");
        assert_eq!(room.price_per_night, 120.0);
    }
}
