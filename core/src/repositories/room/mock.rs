//! Mock implementation of RoomRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::room::Room;
use crate::errors::DomainError;

use super::trait_::RoomRepository;

/// Mock room repository for testing
pub struct MockRoomRepository {
    rooms: Arc<RwLock<HashMap<Uuid, Room>>>,
}

impl MockRoomRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            rooms: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed the mock with a room
    pub async fn add_room(&self, room: Room) {
        self.rooms.write().await.insert(room.id, room);
    }
}

impl Default for MockRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoomRepository for MockRoomRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, DomainError> {
        let rooms = self.rooms.read().await;
        Ok(rooms.get(&id).cloned())
    }
}
