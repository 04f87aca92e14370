//! DTOs for the booking endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use hostly_core::domain::entities::booking::{Booking, BookingStatus};
use hostly_core::domain::entities::room::Room;
use hostly_core::domain::entities::user::BookingOwner;
use hostly_core::domain::value_objects::booking_details::BookingDetails;

/// Request body for creating a booking
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBookingRequest {
    /// Room to book
    pub room_id: Uuid,
    /// Stay start (check-in date)
    pub check_in: DateTime<Utc>,
    /// Stay end (check-out date)
    pub check_out: DateTime<Utc>,
}

/// Request body for overwriting a booking's status
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStatusRequest {
    /// Target status name
    #[validate(length(min = 1, max = 20, message = "Status must be 1-20 characters"))]
    pub status: String,
}

/// Query parameters for a room availability check
#[derive(Debug, Clone, Deserialize)]
pub struct AvailabilityQuery {
    /// Stay start (check-in date)
    pub check_in: DateTime<Utc>,
    /// Stay end (check-out date)
    pub check_out: DateTime<Utc>,
}

/// A booking as returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            room_id: booking.room_id,
            user_id: booking.user_id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            total_price: booking.total_price,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

/// Room fields included in joined booking reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: Uuid,
    pub name: String,
    pub price_per_night: f64,
}

impl From<Room> for RoomSummary {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            name: room.name,
            price_per_night: room.price_per_night,
        }
    }
}

/// Owner fields included in joined booking reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<BookingOwner> for OwnerResponse {
    fn from(owner: BookingOwner) -> Self {
        Self {
            first_name: owner.first_name,
            last_name: owner.last_name,
            email: owner.email,
        }
    }
}

/// A booking joined with its room and, when known, its owner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetailsResponse {
    #[serde(flatten)]
    pub booking: BookingResponse,
    pub room: RoomSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerResponse>,
}

impl From<BookingDetails> for BookingDetailsResponse {
    fn from(details: BookingDetails) -> Self {
        Self {
            booking: BookingResponse::from(details.booking),
            room: RoomSummary::from(details.room),
            owner: details.owner.map(OwnerResponse::from),
        }
    }
}

/// Result of a room availability check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub room_id: Uuid,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub available: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_status_request_validation() {
        let valid = UpdateStatusRequest {
            status: "confirmed".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = UpdateStatusRequest {
            status: String::new(),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_booking_response_from_entity() {
        let booking = Booking {
            id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            check_in: Utc::now(),
            check_out: Utc::now() + chrono::Duration::days(2),
            total_price: 240.0,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };
        let response = BookingResponse::from(booking.clone());
        assert_eq!(response.id, booking.id);
        assert_eq!(response.status, BookingStatus::Pending);
    }
}
