//! Booking service: the hold-to-booking handoff.
//!
//! The critical section of the purchase flow. A booking is created in
//! `Pending` while its hold stays active, so the seats remain claimed
//! while payment is in flight; `confirm` and `cancel` resolve the state
//! and release the hold afterwards.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use validator::Validate;

use ridehub_core::config::pricing::PricingConfig;
use ridehub_core::error::AppError;
use ridehub_core::result::AppResult;
use ridehub_core::types::{BookingId, HolderId, HoldId, SeatNumber, TripId};
use ridehub_entity::{
    Booking, BookingStatus, BookingStore, FareBreakdown, Passenger, TripCatalog,
};
use ridehub_lock::{ReleaseOutcome, SeatLockManager};

use super::pnr;

/// Hold-to-booking handoff service.
pub struct BookingService {
    /// Durable booking store.
    bookings: Arc<dyn BookingStore>,
    /// Trip read collaborator (for pricing).
    catalog: Arc<dyn TripCatalog>,
    /// The lock manager owning the holds being converted.
    locks: Arc<SeatLockManager>,
    /// Fare pricing-policy inputs.
    pricing: PricingConfig,
}

impl BookingService {
    /// Create a new booking service.
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        catalog: Arc<dyn TripCatalog>,
        locks: Arc<SeatLockManager>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            bookings,
            catalog,
            locks,
            pricing,
        }
    }

    /// Create a `Pending` booking from a live hold.
    ///
    /// The hold is **not** released here: it must stay active until
    /// payment resolves, or another actor could take the seats while
    /// payment is in flight. Any validation failure rejects without
    /// creating a booking and without touching the hold.
    pub async fn create_booking(
        &self,
        hold_id: HoldId,
        trip_id: TripId,
        seats: Vec<SeatNumber>,
        passengers: Vec<Passenger>,
        holder: HolderId,
    ) -> AppResult<Booking> {
        let hold = self.locks.get_hold(hold_id).await?.ok_or_else(|| {
            AppError::not_found("Your seat hold has expired, please reselect your seats")
        })?;

        if hold.trip_id != trip_id {
            return Err(AppError::validation("Hold does not belong to this trip"));
        }
        if seats.is_empty() {
            return Err(AppError::validation("No seats provided"));
        }
        if !hold.covers(&seats) {
            return Err(AppError::validation(
                "Requested seats are not covered by the hold",
            ));
        }

        Self::validate_passengers(&passengers, &seats)?;

        let trip = self
            .catalog
            .get_trip(trip_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Trip not found: {trip_id}")))?;

        let fare = FareBreakdown::compute(
            trip.price,
            seats.len() as u32,
            self.pricing.tax_rate,
            self.pricing.service_fee_rate,
        );

        let booking = Booking {
            id: BookingId::new(),
            pnr: pnr::generate_unique_pnr(self.bookings.as_ref()).await?,
            trip_id,
            holder,
            hold_id,
            seats,
            passengers,
            fare,
            status: BookingStatus::Pending,
            payment_reference: None,
            created_at: Utc::now(),
            confirmed_at: None,
            cancelled_at: None,
            cancellation_reason: None,
        };

        self.bookings.insert(&booking).await?;

        info!(
            booking_id = %booking.id,
            pnr = %booking.pnr,
            %trip_id,
            %hold_id,
            "Booking created"
        );
        Ok(booking)
    }

    /// Confirm a `Pending` booking after successful payment.
    ///
    /// The status write happens before the hold release: a crash between
    /// the two leaves the seats over-held rather than double-sold.
    /// Confirming a non-pending booking is rejected, which also guards
    /// against duplicate confirmations.
    pub async fn confirm(
        &self,
        booking_id: BookingId,
        payment_reference: &str,
    ) -> AppResult<Booking> {
        let mut booking = self.require_booking(booking_id).await?;

        if !booking.is_pending() {
            return Err(AppError::state(format!(
                "Booking already processed: {:?}",
                booking.status
            )));
        }

        booking.status = BookingStatus::Confirmed;
        booking.payment_reference = Some(payment_reference.to_string());
        booking.confirmed_at = Some(Utc::now());
        self.bookings.update(&booking).await?;

        self.release_hold_quietly(booking.hold_id).await;

        info!(%booking_id, pnr = %booking.pnr, "Booking confirmed");
        Ok(booking)
    }

    /// Cancel a booking, releasing its hold if payment had not resolved.
    ///
    /// A `Confirmed` booking's seats are freed through a separate
    /// admin/refund path; by then there is no hold left to release.
    pub async fn cancel(
        &self,
        booking_id: BookingId,
        holder: Option<&HolderId>,
        reason: &str,
    ) -> AppResult<Booking> {
        let mut booking = self.require_booking(booking_id).await?;

        if let Some(holder) = holder {
            if holder != &booking.holder {
                return Err(AppError::validation(
                    "Holder is not authorized to cancel this booking",
                ));
            }
        }
        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::state("Booking already cancelled"));
        }

        // Captured before the transition; the hold only needs releasing
        // if payment was still unresolved.
        let was_pending = booking.is_pending();

        booking.status = BookingStatus::Cancelled;
        booking.cancelled_at = Some(Utc::now());
        booking.cancellation_reason = Some(reason.to_string());
        self.bookings.update(&booking).await?;

        if was_pending {
            self.release_hold_quietly(booking.hold_id).await;
        }

        info!(%booking_id, pnr = %booking.pnr, reason, "Booking cancelled");
        Ok(booking)
    }

    /// Fetch a booking by id.
    pub async fn get_booking(&self, booking_id: BookingId) -> AppResult<Booking> {
        self.require_booking(booking_id).await
    }

    /// Fetch a booking by its PNR.
    pub async fn get_booking_by_pnr(&self, pnr: &str) -> AppResult<Booking> {
        self.bookings
            .find_by_pnr(pnr)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking not found with PNR: {pnr}")))
    }

    async fn require_booking(&self, booking_id: BookingId) -> AppResult<Booking> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Booking not found: {booking_id}")))
    }

    /// Release the hold behind a resolved booking. An already-expired or
    /// already-released hold is the expected case and not an error; a
    /// store fault is logged but does not fail the booking transition
    /// that already happened.
    async fn release_hold_quietly(&self, hold_id: HoldId) {
        match self.locks.release(hold_id).await {
            Ok(ReleaseOutcome::Released) => {}
            Ok(ReleaseOutcome::NotFound) => {
                info!(%hold_id, "Hold already gone at release time");
            }
            Err(e) => {
                warn!(%hold_id, error = %e, "Failed to release hold; it will lapse via TTL");
            }
        }
    }

    fn validate_passengers(passengers: &[Passenger], seats: &[SeatNumber]) -> AppResult<()> {
        if passengers.is_empty() {
            return Err(AppError::validation("Passenger information is required"));
        }
        if passengers.len() != seats.len() {
            return Err(AppError::validation(format!(
                "Passenger count ({}) must match seat count ({})",
                passengers.len(),
                seats.len()
            )));
        }
        for (i, passenger) in passengers.iter().enumerate() {
            passenger.validate().map_err(|e| {
                AppError::validation(format!("Passenger {} is invalid: {e}", i + 1))
            })?;
        }
        Ok(())
    }
}
