//! Booking repository trait defining the interface for booking persistence.
//!
//! Bookings are append-only: records are inserted and status-transitioned,
//! never deleted. Implementations must make `insert_pending` atomic with
//! respect to the overlap check (see the method docs); this is what closes
//! the check-then-insert race between concurrent create requests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::value_objects::booking_details::BookingDetails;
use crate::domain::value_objects::stay_dates::StayDates;
use crate::errors::DomainError;

/// Repository trait for booking persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new pending booking, guarding against double-booking.
    ///
    /// The check for overlapping active bookings on the same room and the
    /// insert must happen atomically: two concurrent inserts for truly
    /// overlapping intervals on one room must serialize, and the loser must
    /// fail with `DomainError::Conflict`. The SQL implementation achieves
    /// this with a transaction that locks the room row; the mock holds its
    /// write lock across check and insert.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The persisted booking
    /// * `Err(DomainError::Conflict)` - An active booking overlaps the stay
    /// * `Err(DomainError)` - Database or other error occurred
    async fn insert_pending(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Find a booking by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Find a booking by id, joined with its room and owner projection
    async fn find_details_by_id(&self, id: Uuid) -> Result<Option<BookingDetails>, DomainError>;

    /// All bookings owned by a user, joined with their rooms,
    /// newest-created first
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<BookingDetails>, DomainError>;

    /// Every booking with room and owner projection, newest-created first
    async fn find_all(&self) -> Result<Vec<BookingDetails>, DomainError>;

    /// Active (pending or confirmed) bookings on a room whose intervals
    /// conflict with the given stay.
    ///
    /// With `include_boundaries` a booking that merely touches the stay at
    /// a boundary date also counts as conflicting.
    async fn find_active_overlapping(
        &self,
        room_id: Uuid,
        stay: &StayDates,
        include_boundaries: bool,
    ) -> Result<Vec<Booking>, DomainError>;

    /// Overwrite the status of a booking
    ///
    /// # Returns
    /// * `Ok(Some(Booking))` - The updated booking
    /// * `Ok(None)` - No booking with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn set_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DomainError>;
}
