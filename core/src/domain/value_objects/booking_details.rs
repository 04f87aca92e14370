//! Booking read model joined with its room and owner.

use serde::{Deserialize, Serialize};

use crate::domain::entities::booking::Booking;
use crate::domain::entities::room::Room;
use crate::domain::entities::user::BookingOwner;

/// A booking joined with its room and, where available, the limited owner
/// projection. This is what list and detail reads return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetails {
    /// The booking record itself
    pub booking: Booking,

    /// The reserved room
    pub room: Room,

    /// Limited owner fields (first name, last name, email)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<BookingOwner>,
}

impl BookingDetails {
    /// Creates a joined booking view
    pub fn new(booking: Booking, room: Room, owner: Option<BookingOwner>) -> Self {
        Self {
            booking,
            room,
            owner,
        }
    }
}
