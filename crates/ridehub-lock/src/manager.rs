//! Seat lock manager.
//!
//! Owns the hold lifecycle end to end: acquire, release, extend, and the
//! point queries the availability resolver composes. The manager is the
//! only component that writes hold records or seat-to-hold index entries;
//! everything else goes through this interface.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use ridehub_cache::{CacheManager, keys};
use ridehub_core::error::AppError;
use ridehub_core::result::AppResult;
use ridehub_core::traits::cache::CacheProvider;
use ridehub_core::types::{HolderId, HoldId, SeatNumber, TripId};
use ridehub_entity::{BookingStore, Hold};

use crate::outcome::{AcquireOutcome, ExtendOutcome, HoldConflict, ReleaseOutcome};

/// Store-backed manager for time-bounded, exclusive seat holds.
///
/// Correctness depends on the store's per-key atomicity plus the hold
/// window being generous relative to client round trips; there is no
/// in-process lock or mutex anywhere.
#[derive(Clone)]
pub struct SeatLockManager {
    /// Expiring store holding hold records and the seat-to-hold index.
    store: Arc<CacheManager>,
    /// Confirmed-booking read collaborator.
    bookings: Arc<dyn BookingStore>,
    /// Hold duration applied on acquire.
    hold_ttl: Duration,
    /// Upper bound on a single extension.
    max_extension: Duration,
}

impl SeatLockManager {
    /// Create a new lock manager.
    pub fn new(
        store: Arc<CacheManager>,
        bookings: Arc<dyn BookingStore>,
        hold_ttl: Duration,
        max_extension: Duration,
    ) -> Self {
        Self {
            store,
            bookings,
            hold_ttl,
            max_extension,
        }
    }

    /// Try to acquire a hold on `seats` for `holder`.
    ///
    /// The whole request is rejected with no side effects if any seat is
    /// already held or already booked. The check-then-write sequence is
    /// not atomic across seats: two overlapping acquires can both pass
    /// their read phase before either writes, yielding a brief
    /// double-hold. Accepted residual race; closing it would need a
    /// compound-key compare-and-swap over the canonicalized seat set.
    pub async fn acquire(
        &self,
        trip_id: TripId,
        seats: Vec<SeatNumber>,
        holder: HolderId,
    ) -> AppResult<AcquireOutcome> {
        if seats.is_empty() {
            return Err(AppError::validation("at least one seat must be requested"));
        }

        for seat in &seats {
            if self.is_held(trip_id, seat).await? {
                info!(%trip_id, %seat, "Acquire rejected: seat already held");
                return Ok(AcquireOutcome::Rejected(HoldConflict::AlreadyHeld {
                    seat: seat.clone(),
                }));
            }
            if self.is_booked(trip_id, seat).await? {
                info!(%trip_id, %seat, "Acquire rejected: seat already booked");
                return Ok(AcquireOutcome::Rejected(HoldConflict::AlreadyBooked {
                    seat: seat.clone(),
                }));
            }
        }

        let hold = Hold::new(trip_id, seats, holder, self.hold_ttl);

        self.store
            .set_json(&keys::hold(hold.id), &hold, self.hold_ttl)
            .await?;

        // One index entry per seat, same TTL as the hold record so they
        // lapse together.
        for seat in &hold.seats {
            self.store
                .set(
                    &keys::seat_lock(trip_id, seat),
                    &hold.id.to_string(),
                    self.hold_ttl,
                )
                .await?;
        }

        info!(
            hold_id = %hold.id,
            %trip_id,
            seats = hold.seats.len(),
            expires_at = %hold.expires_at,
            "Hold acquired"
        );
        Ok(AcquireOutcome::Acquired(hold))
    }

    /// Release a hold and free all its seats.
    ///
    /// Index entries are deleted before the hold record, so a crash
    /// mid-release leaves a hold record with no index entries rather
    /// than orphaned seat claims.
    pub async fn release(&self, hold_id: HoldId) -> AppResult<ReleaseOutcome> {
        let Some(hold) = self.get_hold(hold_id).await? else {
            return Ok(ReleaseOutcome::NotFound);
        };

        for seat in &hold.seats {
            self.store
                .delete(&keys::seat_lock(hold.trip_id, seat))
                .await?;
        }
        self.store.delete(&keys::hold(hold_id)).await?;

        info!(%hold_id, trip_id = %hold.trip_id, "Hold released");
        Ok(ReleaseOutcome::Released)
    }

    /// Push a hold's expiry forward by `additional`.
    ///
    /// The hold record and every seat index entry are re-written together
    /// with a TTL recomputed from now to the new expiry, so none lapses
    /// before another.
    pub async fn extend(&self, hold_id: HoldId, additional: Duration) -> AppResult<ExtendOutcome> {
        if additional > self.max_extension {
            return Err(AppError::validation(format!(
                "extension exceeds the configured maximum of {}s",
                self.max_extension.as_secs()
            )));
        }

        let Some(mut hold) = self.get_hold(hold_id).await? else {
            return Ok(ExtendOutcome::NotFound);
        };

        hold.expires_at += chrono::Duration::from_std(additional)
            .map_err(|e| AppError::validation(format!("extension out of range: {e}")))?;
        let ttl_from_now = hold.remaining_ttl();

        self.store
            .set_json(&keys::hold(hold_id), &hold, ttl_from_now)
            .await?;
        for seat in &hold.seats {
            self.store
                .set(
                    &keys::seat_lock(hold.trip_id, seat),
                    &hold_id.to_string(),
                    ttl_from_now,
                )
                .await?;
        }

        info!(%hold_id, expires_at = %hold.expires_at, "Hold extended");
        Ok(ExtendOutcome::Extended(hold))
    }

    /// Whether a live seat-to-hold index entry exists for the seat.
    pub async fn is_held(&self, trip_id: TripId, seat: &SeatNumber) -> AppResult<bool> {
        self.store.exists(&keys::seat_lock(trip_id, seat)).await
    }

    /// Whether any confirmed booking on the trip references the seat.
    pub async fn is_booked(&self, trip_id: TripId, seat: &SeatNumber) -> AppResult<bool> {
        let confirmed = self.bookings.find_confirmed_by_trip(trip_id).await?;
        Ok(confirmed.iter().any(|booking| booking.has_seat(seat)))
    }

    /// Whether the hold exists and its stored expiry is still in the
    /// future. Defensive check on top of store TTL, since TTL precision
    /// is not guaranteed to the millisecond.
    pub async fn is_valid(&self, hold_id: HoldId) -> AppResult<bool> {
        match self.get_hold(hold_id).await? {
            Some(hold) => Ok(!hold.is_expired()),
            None => Ok(false),
        }
    }

    /// Fetch a hold record, if a live one exists.
    pub async fn get_hold(&self, hold_id: HoldId) -> AppResult<Option<Hold>> {
        let hold: Option<Hold> = self.store.get_json(&keys::hold(hold_id)).await?;
        match hold {
            // Stored expiry wins over TTL precision: an expired record is
            // logically absent.
            Some(h) if h.is_expired() => {
                warn!(%hold_id, "Hold record outlived its expiry; treating as absent");
                Ok(None)
            }
            other => Ok(other),
        }
    }
}

impl std::fmt::Debug for SeatLockManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatLockManager")
            .field("hold_ttl", &self.hold_ttl)
            .field("max_extension", &self.max_extension)
            .finish_non_exhaustive()
    }
}
