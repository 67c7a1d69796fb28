//! In-memory booking store.
//!
//! Reference implementation of the [`BookingStore`] collaborator for
//! single-node deployments and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ridehub_core::result::AppResult;
use ridehub_core::types::{BookingId, TripId};
use ridehub_entity::{Booking, BookingStore};

/// In-memory booking store backed by a hash map.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: RwLock<HashMap<BookingId, Booking>>,
}

impl MemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert(&self, booking: &Booking) -> AppResult<()> {
        self.bookings
            .write()
            .await
            .insert(booking.id, booking.clone());
        Ok(())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self.bookings.read().await.get(&booking_id).cloned())
    }

    async fn find_by_pnr(&self, pnr: &str) -> AppResult<Option<Booking>> {
        Ok(self
            .bookings
            .read()
            .await
            .values()
            .find(|b| b.pnr == pnr)
            .cloned())
    }

    async fn find_confirmed_by_trip(&self, trip_id: TripId) -> AppResult<Vec<Booking>> {
        Ok(self
            .bookings
            .read()
            .await
            .values()
            .filter(|b| b.trip_id == trip_id && b.is_confirmed())
            .cloned()
            .collect())
    }

    async fn update(&self, booking: &Booking) -> AppResult<()> {
        self.bookings
            .write()
            .await
            .insert(booking.id, booking.clone());
        Ok(())
    }

    async fn pnr_exists(&self, pnr: &str) -> AppResult<bool> {
        Ok(self.find_by_pnr(pnr).await?.is_some())
    }
}
