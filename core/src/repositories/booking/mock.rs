//! Mock implementation of BookingRepository for testing
//!
//! Bookings, rooms, and owner projections live behind a single `RwLock`
//! each; `insert_pending` holds the booking write lock across its overlap
//! check and insert, which gives the same atomicity the SQL implementation
//! gets from its transaction.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::room::Room;
use crate::domain::entities::user::BookingOwner;
use crate::domain::value_objects::booking_details::BookingDetails;
use crate::domain::value_objects::stay_dates::StayDates;
use crate::errors::DomainError;

use super::trait_::BookingRepository;

/// Mock booking repository for testing
pub struct MockBookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
    rooms: Arc<RwLock<HashMap<Uuid, Room>>>,
    owners: Arc<RwLock<HashMap<Uuid, BookingOwner>>>,
}

impl MockBookingRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(Vec::new())),
            rooms: Arc::new(RwLock::new(HashMap::new())),
            owners: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the mock with a room so joined reads can resolve it
    pub async fn add_room(&self, room: Room) {
        self.rooms.write().await.insert(room.id, room);
    }

    /// Seed the mock with an owner projection for a user id
    pub async fn add_owner(&self, user_id: Uuid, owner: BookingOwner) {
        self.owners.write().await.insert(user_id, owner);
    }

    /// Insert a booking directly, bypassing the overlap guard.
    /// Useful for seeding test fixtures in arbitrary states.
    pub async fn add_booking(&self, booking: Booking) {
        self.bookings.write().await.push(booking);
    }

    async fn join(&self, booking: Booking) -> Result<BookingDetails, DomainError> {
        let rooms = self.rooms.read().await;
        let room = rooms.get(&booking.room_id).cloned().ok_or_else(|| {
            DomainError::database(format!("room {} missing for booking join", booking.room_id))
        })?;
        let owner = self.owners.read().await.get(&booking.user_id).cloned();
        Ok(BookingDetails::new(booking, room, owner))
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn insert_pending(&self, booking: Booking) -> Result<Booking, DomainError> {
        // Write lock held across check and insert: atomic by construction.
        let mut bookings = self.bookings.write().await;

        let stay = StayDates::new(booking.check_in, booking.check_out)?;
        let conflict = bookings
            .iter()
            .any(|b| b.room_id == booking.room_id && b.is_active() && b.conflicts_with(&stay, false));
        if conflict {
            return Err(DomainError::conflict(format!(
                "room {} already booked for an overlapping stay",
                booking.room_id
            )));
        }

        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    async fn find_details_by_id(&self, id: Uuid) -> Result<Option<BookingDetails>, DomainError> {
        let booking = match self.find_by_id(id).await? {
            Some(booking) => booking,
            None => return Ok(None),
        };
        Ok(Some(self.join(booking).await?))
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<BookingDetails>, DomainError> {
        let mut owned: Vec<Booking> = {
            let bookings = self.bookings.read().await;
            bookings.iter().filter(|b| b.user_id == user_id).cloned().collect()
        };
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut details = Vec::with_capacity(owned.len());
        for booking in owned {
            details.push(self.join(booking).await?);
        }
        Ok(details)
    }

    async fn find_all(&self) -> Result<Vec<BookingDetails>, DomainError> {
        let mut all: Vec<Booking> = self.bookings.read().await.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut details = Vec::with_capacity(all.len());
        for booking in all {
            details.push(self.join(booking).await?);
        }
        Ok(details)
    }

    async fn find_active_overlapping(
        &self,
        room_id: Uuid,
        stay: &StayDates,
        include_boundaries: bool,
    ) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| {
                b.room_id == room_id && b.is_active() && b.conflicts_with(stay, include_boundaries)
            })
            .cloned()
            .collect())
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DomainError> {
        let mut bookings = self.bookings.write().await;
        match bookings.iter_mut().find(|b| b.id == id) {
            Some(booking) => {
                booking.status = status;
                Ok(Some(booking.clone()))
            }
            None => Ok(None),
        }
    }
}
