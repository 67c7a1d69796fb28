//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rust_decimal_macros::dec;

use ridehub_cache::CacheManager;
use ridehub_cache::memory::MemoryCacheProvider;
use ridehub_core::config::cache::MemoryCacheConfig;
use ridehub_core::config::logging::LoggingConfig;
use ridehub_core::config::pricing::PricingConfig;
use ridehub_core::telemetry;
use ridehub_core::types::{BookingId, BusId, HolderId, HoldId, SeatNumber, TripId};
use ridehub_entity::{
    Booking, BookingStatus, BookingStore, FareBreakdown, Hold, Passenger, SeatConfig,
    SeatPosition, Trip,
};
use ridehub_lock::{AcquireOutcome, SeatLockManager};
use ridehub_service::{BookingService, MemoryBookingStore, MemoryTripCatalog, SeatSelectionService};

/// Test application context: all services wired against in-memory
/// collaborators and one seeded trip with a 2x2 seat layout
/// (A1, A2, B1, B2) at a flat price of 500.
pub struct TestApp {
    pub catalog: Arc<MemoryTripCatalog>,
    pub bookings: Arc<MemoryBookingStore>,
    pub locks: Arc<SeatLockManager>,
    pub selection: SeatSelectionService,
    pub booking: BookingService,
    pub trip_id: TripId,
}

impl TestApp {
    /// Create a test application with the default 10-minute hold TTL.
    pub async fn new() -> Self {
        Self::with_hold_ttl(Duration::from_secs(600)).await
    }

    /// Create a test application with a custom hold TTL (short TTLs are
    /// used by expiry tests).
    pub async fn with_hold_ttl(hold_ttl: Duration) -> Self {
        telemetry::init_logging(&LoggingConfig {
            level: "warn".to_string(),
            format: "pretty".to_string(),
        });

        let store = Arc::new(CacheManager::from_provider(Arc::new(
            MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 10_000 }),
        )));
        let catalog = Arc::new(MemoryTripCatalog::new());
        let bookings = Arc::new(MemoryBookingStore::new());

        let locks = Arc::new(SeatLockManager::new(
            store,
            bookings.clone(),
            hold_ttl,
            Duration::from_secs(3600),
        ));

        let pricing = PricingConfig::default();
        let selection = SeatSelectionService::new(
            catalog.clone(),
            bookings.clone(),
            locks.clone(),
            pricing.clone(),
        );
        let booking = BookingService::new(
            bookings.clone(),
            catalog.clone(),
            locks.clone(),
            pricing,
        );

        let trip_id = TripId::new();
        let bus_id = BusId::new();
        catalog
            .add_trip(Trip {
                id: trip_id,
                bus_id,
                price: dec!(500),
            })
            .await;
        catalog
            .add_seat_config(
                bus_id,
                SeatConfig {
                    rows: 2,
                    columns: 2,
                    seats: vec![
                        seat_position("A1", 0, 0),
                        seat_position("A2", 0, 1),
                        seat_position("B1", 1, 0),
                        seat_position("B2", 1, 1),
                    ],
                },
            )
            .await;

        Self {
            catalog,
            bookings,
            locks,
            selection,
            booking,
            trip_id,
        }
    }

    /// Acquire a hold on the seeded trip, panicking on rejection.
    pub async fn acquire_ok(&self, labels: &[&str], holder: &str) -> Hold {
        match self
            .selection
            .select_seats(self.trip_id, seats(labels), HolderId::from(holder))
            .await
            .expect("acquire failed")
        {
            AcquireOutcome::Acquired(hold) => hold,
            AcquireOutcome::Rejected(conflict) => panic!("unexpected rejection: {conflict:?}"),
        }
    }

    /// Acquire expecting a rejection, returning the conflict.
    pub async fn acquire_rejected(
        &self,
        labels: &[&str],
        holder: &str,
    ) -> ridehub_lock::HoldConflict {
        match self
            .selection
            .select_seats(self.trip_id, seats(labels), HolderId::from(holder))
            .await
            .expect("acquire failed")
        {
            AcquireOutcome::Rejected(conflict) => conflict,
            AcquireOutcome::Acquired(hold) => panic!("unexpected acquire: {hold:?}"),
        }
    }

    /// Insert a confirmed booking directly, bypassing the handoff.
    pub async fn seed_confirmed_booking(&self, labels: &[&str]) -> Booking {
        let seats = seats(labels);
        let booking = Booking {
            id: BookingId::new(),
            pnr: format!("SEED{:06}", seats.len()),
            trip_id: self.trip_id,
            holder: HolderId::from("seeder"),
            hold_id: HoldId::new(),
            passengers: passengers(seats.len()),
            fare: FareBreakdown::compute(dec!(500), seats.len() as u32, dec!(0.18), dec!(0.05)),
            seats,
            status: BookingStatus::Confirmed,
            payment_reference: Some("SEED-TXN".to_string()),
            created_at: Utc::now(),
            confirmed_at: Some(Utc::now()),
            cancelled_at: None,
            cancellation_reason: None,
        };
        self.bookings.insert(&booking).await.expect("seed booking");
        booking
    }
}

/// Build seat numbers from labels.
pub fn seats(labels: &[&str]) -> Vec<SeatNumber> {
    labels.iter().map(|l| SeatNumber::from(*l)).collect()
}

/// Build `n` valid passengers.
pub fn passengers(n: usize) -> Vec<Passenger> {
    (0..n)
        .map(|i| {
            Passenger::new(
                format!("Passenger {}", i + 1),
                format!("555-010{i}"),
                format!("passenger{i}@example.com"),
            )
        })
        .collect()
}

fn seat_position(label: &str, row: u32, column: u32) -> SeatPosition {
    SeatPosition {
        number: SeatNumber::from(label),
        row,
        column,
    }
}
