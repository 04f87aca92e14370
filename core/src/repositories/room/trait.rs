//! Room repository trait defining the interface for room catalog lookups.
//!
//! The booking engine treats the room catalog as read-only: it only needs
//! to know whether a room exists and what it costs per night.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::room::Room;
use crate::errors::DomainError;

/// Repository trait for room catalog lookups
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Find a room by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(Room))` - Room found
    /// * `Ok(None)` - No room with the given id
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, DomainError>;
}
