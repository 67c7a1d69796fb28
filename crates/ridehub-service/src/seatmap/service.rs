//! Seat selection service.
//!
//! Produces the classified seat map for a trip and fronts the lock
//! manager for the seat-selection flow: select (acquire), deselect
//! (release), and extend.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use ridehub_core::config::pricing::PricingConfig;
use ridehub_core::error::AppError;
use ridehub_core::result::AppResult;
use ridehub_core::types::{HolderId, HoldId, SeatNumber, TripId};
use ridehub_entity::{
    BookingStore, FareBreakdown, Seat, SeatLayout, SeatStatus, TripCatalog,
};
use ridehub_lock::{AcquireOutcome, ExtendOutcome, ReleaseOutcome, SeatLockManager};

/// Availability resolver and hold API for the seat-selection flow.
pub struct SeatSelectionService {
    /// Trip/bus read collaborator.
    catalog: Arc<dyn TripCatalog>,
    /// Confirmed-booking read collaborator.
    bookings: Arc<dyn BookingStore>,
    /// The lock manager owning all hold state.
    locks: Arc<SeatLockManager>,
    /// Fare rates for the pre-booking price preview.
    pricing: PricingConfig,
}

impl SeatSelectionService {
    /// Create a new seat selection service.
    pub fn new(
        catalog: Arc<dyn TripCatalog>,
        bookings: Arc<dyn BookingStore>,
        locks: Arc<SeatLockManager>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            catalog,
            bookings,
            locks,
            pricing,
        }
    }

    /// Build the full seat map for a trip, one classification per
    /// configured seat.
    ///
    /// Confirmed bookings are fetched once per layout rather than once
    /// per seat; held state is still a per-seat point query against the
    /// seat-to-hold index.
    pub async fn seat_layout(&self, trip_id: TripId) -> AppResult<SeatLayout> {
        let trip = self
            .catalog
            .get_trip(trip_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Trip not found: {trip_id}")))?;

        let config = self
            .catalog
            .get_seat_config(trip.bus_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Seat configuration not found for trip: {trip_id}"))
            })?;

        let booked: HashSet<SeatNumber> = self
            .bookings
            .find_confirmed_by_trip(trip_id)
            .await?
            .into_iter()
            .flat_map(|booking| booking.seats)
            .collect();

        let mut seats = Vec::with_capacity(config.seats.len());
        for position in &config.seats {
            let status = if booked.contains(&position.number) {
                SeatStatus::Booked
            } else if self.locks.is_held(trip_id, &position.number).await? {
                SeatStatus::Held
            } else {
                SeatStatus::Available
            };

            seats.push(Seat {
                number: position.number.clone(),
                row: position.row,
                column: position.column,
                status,
                price: trip.price,
            });
        }

        debug!(%trip_id, seats = seats.len(), "Seat layout resolved");
        Ok(SeatLayout {
            trip_id,
            rows: config.rows,
            columns: config.columns,
            seats,
        })
    }

    /// Classify one seat. Booked wins over held, held over available.
    pub async fn classify(&self, trip_id: TripId, seat: &SeatNumber) -> AppResult<SeatStatus> {
        if self.locks.is_booked(trip_id, seat).await? {
            return Ok(SeatStatus::Booked);
        }
        if self.locks.is_held(trip_id, seat).await? {
            return Ok(SeatStatus::Held);
        }
        Ok(SeatStatus::Available)
    }

    /// Select seats by acquiring a hold on them.
    pub async fn select_seats(
        &self,
        trip_id: TripId,
        seats: Vec<SeatNumber>,
        holder: HolderId,
    ) -> AppResult<AcquireOutcome> {
        self.locks.acquire(trip_id, seats, holder).await
    }

    /// Deselect seats by releasing the hold. Returns `false` if the hold
    /// was already gone, which is not an error (it simply expired).
    pub async fn release_hold(&self, hold_id: HoldId) -> AppResult<bool> {
        Ok(self.locks.release(hold_id).await? == ReleaseOutcome::Released)
    }

    /// Extend a hold by the given number of minutes. Returns `false` if
    /// the hold was already gone.
    pub async fn extend_hold(&self, hold_id: HoldId, minutes: u64) -> AppResult<bool> {
        let outcome = self
            .locks
            .extend(hold_id, Duration::from_secs(minutes * 60))
            .await?;
        Ok(matches!(outcome, ExtendOutcome::Extended(_)))
    }

    /// Fare breakdown preview for a prospective seat selection.
    pub async fn fare_summary(
        &self,
        trip_id: TripId,
        seats: &[SeatNumber],
    ) -> AppResult<FareBreakdown> {
        if seats.is_empty() {
            return Err(AppError::validation("at least one seat must be selected"));
        }

        let trip = self
            .catalog
            .get_trip(trip_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Trip not found: {trip_id}")))?;

        Ok(FareBreakdown::compute(
            trip.price,
            seats.len() as u32,
            self.pricing.tax_rate,
            self.pricing.service_fee_rate,
        ))
    }
}
