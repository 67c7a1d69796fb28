//! Collaborator traits: trip catalog and booking store.
//!
//! Both stores are external to the seat-hold core. The trip catalog is
//! read-only; bookings are written only by the booking handoff, never by
//! the lock manager or the availability resolver.

use async_trait::async_trait;

use ridehub_core::result::AppResult;
use ridehub_core::types::{BookingId, BusId, TripId};

use crate::booking::Booking;
use crate::seat::SeatConfig;
use crate::trip::Trip;

/// Read API over trips and bus seat configurations.
#[async_trait]
pub trait TripCatalog: Send + Sync + 'static {
    /// Look up a trip by id.
    async fn get_trip(&self, trip_id: TripId) -> AppResult<Option<Trip>>;

    /// Look up the static seat configuration of a bus.
    async fn get_seat_config(&self, bus_id: BusId) -> AppResult<Option<SeatConfig>>;
}

/// Read/write API over the durable booking store.
#[async_trait]
pub trait BookingStore: Send + Sync + 'static {
    /// Persist a new booking.
    async fn insert(&self, booking: &Booking) -> AppResult<()>;

    /// Look up a booking by id.
    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>>;

    /// Look up a booking by its PNR.
    async fn find_by_pnr(&self, pnr: &str) -> AppResult<Option<Booking>>;

    /// All confirmed bookings for a trip. The availability resolver scans
    /// these to decide which seats are booked.
    async fn find_confirmed_by_trip(&self, trip_id: TripId) -> AppResult<Vec<Booking>>;

    /// Overwrite an existing booking (status transitions).
    async fn update(&self, booking: &Booking) -> AppResult<()>;

    /// Whether a PNR is already taken.
    async fn pnr_exists(&self, pnr: &str) -> AppResult<bool>;
}
