//! MySQL implementation of the RoomRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hostly_core::domain::entities::room::Room;
use hostly_core::errors::DomainError;
use hostly_core::repositories::RoomRepository;

/// MySQL implementation of RoomRepository
pub struct MySqlRoomRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlRoomRepository {
    /// Create a new MySQL room repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Room entity
    pub(crate) fn row_to_room(row: &sqlx::mysql::MySqlRow) -> Result<Room, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("failed to get room id: {}", e)))?;

        Ok(Room {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("invalid room UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::database(format!("failed to get name: {}", e)))?,
            price_per_night: row
                .try_get("price_per_night")
                .map_err(|e| DomainError::database(format!("failed to get price: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl RoomRepository for MySqlRoomRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Room>, DomainError> {
        let query = r#"
            SELECT id, name, price_per_night, created_at
            FROM rooms
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("room query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_room(&row)?)),
            None => Ok(None),
        }
    }
}
