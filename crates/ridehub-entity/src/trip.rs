//! Trip entity slice.
//!
//! The full trip (route, departure times, operator) is owned by the
//! catalog collaborator; this core only reads the fields the seat map
//! and fare computation need.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ridehub_core::types::{BusId, TripId};

/// The slice of a trip this core reads: which bus runs it and the flat
/// per-seat price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    /// Trip identifier.
    pub id: TripId,
    /// The bus (and therefore seat configuration) serving the trip.
    pub bus_id: BusId,
    /// Flat per-seat price. No per-seat pricing tiers.
    pub price: Decimal,
}
