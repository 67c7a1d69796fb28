//! In-memory trip catalog.
//!
//! Reference implementation of the [`TripCatalog`] collaborator for
//! single-node deployments and tests. Production deployments back this
//! trait with whatever catalog service owns trips and buses.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ridehub_core::result::AppResult;
use ridehub_core::types::{BusId, TripId};
use ridehub_entity::{SeatConfig, Trip, TripCatalog};

/// In-memory trip/bus catalog.
#[derive(Debug, Default)]
pub struct MemoryTripCatalog {
    trips: RwLock<HashMap<TripId, Trip>>,
    seat_configs: RwLock<HashMap<BusId, SeatConfig>>,
}

impl MemoryTripCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trip.
    pub async fn add_trip(&self, trip: Trip) {
        self.trips.write().await.insert(trip.id, trip);
    }

    /// Register a bus seat configuration.
    pub async fn add_seat_config(&self, bus_id: BusId, config: SeatConfig) {
        self.seat_configs.write().await.insert(bus_id, config);
    }
}

#[async_trait]
impl TripCatalog for MemoryTripCatalog {
    async fn get_trip(&self, trip_id: TripId) -> AppResult<Option<Trip>> {
        Ok(self.trips.read().await.get(&trip_id).cloned())
    }

    async fn get_seat_config(&self, bus_id: BusId) -> AppResult<Option<SeatConfig>> {
        Ok(self.seat_configs.read().await.get(&bus_id).cloned())
    }
}
