//! MySQL implementation of the BookingRepository trait.
//!
//! The interesting part is `insert_pending`: bookings for one room must
//! never truly overlap, and MySQL has no range-exclusion constraints, so
//! the insert runs in a transaction that locks the room row with
//! `SELECT ... FOR UPDATE` and re-checks for overlapping active bookings
//! before writing. Two concurrent creates for the same room serialize on
//! the row lock and the loser observes the winner's insert.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use hostly_core::domain::entities::booking::{Booking, BookingStatus};
use hostly_core::domain::entities::room::Room;
use hostly_core::domain::entities::user::BookingOwner;
use hostly_core::domain::value_objects::booking_details::BookingDetails;
use hostly_core::domain::value_objects::stay_dates::StayDates;
use hostly_core::errors::DomainError;
use hostly_core::repositories::BookingRepository;

const BOOKING_COLUMNS: &str =
    "id, room_id, user_id, check_in, check_out, total_price, status, created_at";

const DETAILS_QUERY: &str = r#"
    SELECT b.id, b.room_id, b.user_id, b.check_in, b.check_out,
           b.total_price, b.status, b.created_at,
           r.name AS room_name, r.price_per_night, r.created_at AS room_created_at,
           u.first_name, u.last_name, u.email
    FROM bookings b
    INNER JOIN rooms r ON r.id = b.room_id
    LEFT JOIN users u ON u.id = b.user_id
"#;

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    /// Create a new MySQL booking repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Booking entity
    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::database(format!("failed to get booking id: {}", e)))?;
        let room_id: String = row
            .try_get("room_id")
            .map_err(|e| DomainError::database(format!("failed to get room_id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::database(format!("failed to get user_id: {}", e)))?;
        let status: String = row
            .try_get("status")
            .map_err(|e| DomainError::database(format!("failed to get status: {}", e)))?;

        Ok(Booking {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::database(format!("invalid booking UUID: {}", e)))?,
            room_id: Uuid::parse_str(&room_id)
                .map_err(|e| DomainError::database(format!("invalid room UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::database(format!("invalid user UUID: {}", e)))?,
            check_in: row
                .try_get::<DateTime<Utc>, _>("check_in")
                .map_err(|e| DomainError::database(format!("failed to get check_in: {}", e)))?,
            check_out: row
                .try_get::<DateTime<Utc>, _>("check_out")
                .map_err(|e| DomainError::database(format!("failed to get check_out: {}", e)))?,
            total_price: row
                .try_get("total_price")
                .map_err(|e| DomainError::database(format!("failed to get total_price: {}", e)))?,
            status: status.parse::<BookingStatus>()?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::database(format!("failed to get created_at: {}", e)))?,
        })
    }

    /// Convert a joined row to a BookingDetails view
    fn row_to_details(row: &sqlx::mysql::MySqlRow) -> Result<BookingDetails, DomainError> {
        let booking = Self::row_to_booking(row)?;

        let room = Room {
            id: booking.room_id,
            name: row
                .try_get("room_name")
                .map_err(|e| DomainError::database(format!("failed to get room name: {}", e)))?,
            price_per_night: row
                .try_get("price_per_night")
                .map_err(|e| DomainError::database(format!("failed to get price: {}", e)))?,
            created_at: row.try_get::<DateTime<Utc>, _>("room_created_at").map_err(|e| {
                DomainError::database(format!("failed to get room created_at: {}", e))
            })?,
        };

        let first_name: Option<String> = row
            .try_get("first_name")
            .map_err(|e| DomainError::database(format!("failed to get first_name: {}", e)))?;
        let owner = match first_name {
            Some(first_name) => Some(BookingOwner {
                first_name,
                last_name: row.try_get("last_name").map_err(|e| {
                    DomainError::database(format!("failed to get last_name: {}", e))
                })?,
                email: row
                    .try_get("email")
                    .map_err(|e| DomainError::database(format!("failed to get email: {}", e)))?,
            }),
            None => None,
        };

        Ok(BookingDetails::new(booking, room, owner))
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn insert_pending(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database(format!("failed to begin transaction: {}", e)))?;

        // Lock the room row so concurrent inserts for this room serialize.
        let room_row = sqlx::query("SELECT id FROM rooms WHERE id = ? FOR UPDATE")
            .bind(booking.room_id.to_string())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::database(format!("room lock failed: {}", e)))?;
        if room_row.is_none() {
            return Err(DomainError::not_found("room"));
        }

        // Re-check for truly overlapping active bookings inside the
        // transaction; the service's earlier availability check may be
        // stale by now.
        let conflicts: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM bookings
            WHERE room_id = ?
              AND status IN ('pending', 'confirmed')
              AND check_in < ?
              AND check_out > ?
            "#,
        )
        .bind(booking.room_id.to_string())
        .bind(booking.check_out)
        .bind(booking.check_in)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("overlap check failed: {}", e)))?;

        if conflicts > 0 {
            tracing::info!(
                room_id = %booking.room_id,
                "insert rejected: overlapping active booking found in transaction"
            );
            return Err(DomainError::conflict(format!(
                "room {} already booked for an overlapping stay",
                booking.room_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, room_id, user_id, check_in, check_out,
                total_price, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.id.to_string())
        .bind(booking.room_id.to_string())
        .bind(booking.user_id.to_string())
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.total_price)
        .bind(booking.status.as_str())
        .bind(booking.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::database(format!("failed to insert booking: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::database(format!("failed to commit booking: {}", e)))?;

        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!("SELECT {} FROM bookings WHERE id = ? LIMIT 1", BOOKING_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("booking query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_booking(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_details_by_id(&self, id: Uuid) -> Result<Option<BookingDetails>, DomainError> {
        let query = format!("{} WHERE b.id = ? LIMIT 1", DETAILS_QUERY);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("booking details query failed: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_details(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<BookingDetails>, DomainError> {
        let query = format!(
            "{} WHERE b.user_id = ? ORDER BY b.created_at DESC",
            DETAILS_QUERY
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("user bookings query failed: {}", e)))?;

        rows.iter().map(Self::row_to_details).collect()
    }

    async fn find_all(&self) -> Result<Vec<BookingDetails>, DomainError> {
        let query = format!("{} ORDER BY b.created_at DESC", DETAILS_QUERY);

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("all bookings query failed: {}", e)))?;

        rows.iter().map(Self::row_to_details).collect()
    }

    async fn find_active_overlapping(
        &self,
        room_id: Uuid,
        stay: &StayDates,
        include_boundaries: bool,
    ) -> Result<Vec<Booking>, DomainError> {
        // The inclusive form mirrors the availability policy: a booking
        // touching the stay at a boundary date also counts.
        let query = if include_boundaries {
            format!(
                r#"
                SELECT {} FROM bookings
                WHERE room_id = ?
                  AND status IN ('pending', 'confirmed')
                  AND (
                        (check_in BETWEEN ? AND ?)
                     OR (check_out BETWEEN ? AND ?)
                     OR (check_in <= ? AND check_out >= ?)
                  )
                "#,
                BOOKING_COLUMNS
            )
        } else {
            format!(
                r#"
                SELECT {} FROM bookings
                WHERE room_id = ?
                  AND status IN ('pending', 'confirmed')
                  AND check_in < ? AND check_out > ?
                "#,
                BOOKING_COLUMNS
            )
        };

        let mut sql = sqlx::query(&query).bind(room_id.to_string());
        if include_boundaries {
            sql = sql
                .bind(stay.check_in())
                .bind(stay.check_out())
                .bind(stay.check_in())
                .bind(stay.check_out())
                .bind(stay.check_in())
                .bind(stay.check_out());
        } else {
            sql = sql.bind(stay.check_out()).bind(stay.check_in());
        }

        let rows = sql
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("overlap query failed: {}", e)))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn set_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DomainError> {
        sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("status update failed: {}", e)))?;

        // Re-read rather than trusting rows_affected: MySQL reports zero
        // affected rows when the status value is unchanged.
        self.find_by_id(id).await
    }
}
