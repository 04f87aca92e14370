//! Main booking service implementation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingStatus};
use crate::domain::entities::user::Requester;
use crate::domain::value_objects::booking_details::BookingDetails;
use crate::domain::value_objects::stay_dates::StayDates;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{BookingRepository, RoomRepository};

use super::config::BookingServiceConfig;
use super::pricing::calculate_total_price;

/// Booking service managing availability, pricing, and the booking
/// lifecycle
pub struct BookingService<B, R>
where
    B: BookingRepository,
    R: RoomRepository,
{
    /// Booking repository for persistence operations
    booking_repository: Arc<B>,
    /// Room repository for catalog lookups
    room_repository: Arc<R>,
    /// Service configuration
    config: BookingServiceConfig,
}

impl<B, R> BookingService<B, R>
where
    B: BookingRepository,
    R: RoomRepository,
{
    /// Create a new booking service
    ///
    /// # Arguments
    ///
    /// * `booking_repository` - Repository for booking persistence
    /// * `room_repository` - Repository for room catalog lookups
    /// * `config` - Service configuration
    pub fn new(
        booking_repository: Arc<B>,
        room_repository: Arc<R>,
        config: BookingServiceConfig,
    ) -> Self {
        Self {
            booking_repository,
            room_repository,
            config,
        }
    }

    /// Create a booking for a room and stay, owned by the requesting user.
    ///
    /// This method:
    /// 1. Looks up the room (`NotFound` if absent)
    /// 2. Runs the availability check (`Validation` on a malformed range,
    ///    `Conflict` when an active booking overlaps)
    /// 3. Computes the total price from the room's nightly rate
    /// 4. Persists a new `Pending` booking through the repository's atomic
    ///    insert guard, which closes the race between concurrent creates
    pub async fn create_booking(
        &self,
        room_id: Uuid,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
        requesting_user_id: Uuid,
    ) -> DomainResult<Booking> {
        let room = self
            .room_repository
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(%room_id, "booking requested for unknown room");
                DomainError::not_found("room")
            })?;

        let stay = StayDates::new(check_in, check_out)?;
        if !self.is_stay_available(room_id, &stay).await? {
            tracing::info!(
                %room_id,
                %check_in,
                %check_out,
                "booking rejected: room unavailable for requested stay"
            );
            return Err(DomainError::conflict(
                "room is not available for the requested dates",
            ));
        }

        let total_price = calculate_total_price(room.price_per_night, check_in, check_out);
        let booking = Booking::new_pending(room_id, requesting_user_id, &stay, total_price);

        // The repository re-checks overlap inside its own transaction, so a
        // concurrent create that slipped past the check above still fails.
        let booking = self.booking_repository.insert_pending(booking).await?;
        tracing::info!(
            booking_id = %booking.id,
            %room_id,
            user_id = %requesting_user_id,
            total_price = booking.total_price,
            "booking created"
        );
        Ok(booking)
    }

    /// Whether a room is free for the requested interval.
    ///
    /// Validates `check_in < check_out` itself, even though callers may have
    /// validated already. Canceled and completed bookings never conflict.
    pub async fn check_room_availability(
        &self,
        room_id: Uuid,
        check_in: DateTime<Utc>,
        check_out: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let stay = StayDates::new(check_in, check_out)?;
        self.is_stay_available(room_id, &stay).await
    }

    async fn is_stay_available(&self, room_id: Uuid, stay: &StayDates) -> DomainResult<bool> {
        let conflicts = self
            .booking_repository
            .find_active_overlapping(room_id, stay, self.config.include_boundaries())
            .await?;
        Ok(conflicts.is_empty())
    }

    /// All bookings owned by a user, joined with their rooms, newest first
    pub async fn user_bookings(&self, user_id: Uuid) -> DomainResult<Vec<BookingDetails>> {
        self.booking_repository.find_by_user(user_id).await
    }

    /// A single booking with room and owner, gated by ownership or role
    pub async fn booking_by_id(
        &self,
        id: Uuid,
        requester: &Requester,
    ) -> DomainResult<BookingDetails> {
        let details = self
            .booking_repository
            .find_details_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("booking"))?;

        self.ensure_can_access(&details.booking, requester)?;
        Ok(details)
    }

    /// Cancel a booking, gated by ownership or role.
    ///
    /// The cancellation window closes at check-in: once the wall clock has
    /// passed the booking's check-in date the cancel fails with `Conflict`.
    /// On success only the status changes, to `Canceled`.
    pub async fn cancel_booking(&self, id: Uuid, requester: &Requester) -> DomainResult<Booking> {
        let booking = self
            .booking_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("booking"))?;

        self.ensure_can_access(&booking, requester)?;

        if Utc::now() > booking.check_in {
            tracing::info!(
                booking_id = %id,
                check_in = %booking.check_in,
                "cancellation rejected after check-in"
            );
            return Err(DomainError::conflict(
                "booking can no longer be canceled after its check-in date",
            ));
        }

        let canceled = self
            .booking_repository
            .set_status(id, BookingStatus::Canceled)
            .await?
            .ok_or_else(|| DomainError::not_found("booking"))?;
        tracing::info!(booking_id = %id, user_id = %requester.user_id, "booking canceled");
        Ok(canceled)
    }

    /// Every booking with room and owner, newest first.
    ///
    /// Privileged: role enforcement for this listing lives in the HTTP
    /// layer, not here.
    pub async fn all_bookings(&self) -> DomainResult<Vec<BookingDetails>> {
        self.booking_repository.find_all().await
    }

    /// Overwrite a booking's status.
    ///
    /// The new status must be one of the four known values (`Validation`
    /// otherwise); beyond that any status may move to any other, there is
    /// no transition guard.
    pub async fn update_booking_status(
        &self,
        id: Uuid,
        new_status: &str,
    ) -> DomainResult<Booking> {
        let status: BookingStatus = new_status.parse()?;

        let updated = self
            .booking_repository
            .set_status(id, status)
            .await?
            .ok_or_else(|| DomainError::not_found("booking"))?;
        tracing::info!(booking_id = %id, status = %status, "booking status updated");
        Ok(updated)
    }

    /// Owner or a privileged role may touch a booking; anyone else is
    /// rejected with `Forbidden`.
    fn ensure_can_access(&self, booking: &Booking, requester: &Requester) -> DomainResult<()> {
        if booking.is_owned_by(requester.user_id) || requester.role.can_access_any_booking() {
            return Ok(());
        }
        tracing::warn!(
            booking_id = %booking.id,
            user_id = %requester.user_id,
            role = ?requester.role,
            "access to booking denied"
        );
        Err(DomainError::forbidden(
            "you do not have access to this booking",
        ))
    }
}
