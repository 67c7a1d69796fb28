//! Seat layout and classification types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ridehub_core::types::{SeatNumber, TripId};

/// Point-in-time classification of a seat on a trip.
///
/// `Booked` takes precedence over `Held` (a confirmed-booked seat cannot
/// also be meaningfully held), `Held` over `Available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    /// Free to hold.
    Available,
    /// Claimed by a live hold.
    Held,
    /// Referenced by a confirmed booking.
    Booked,
}

/// Static position of one seat within the bus geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPosition {
    /// Seat label, e.g. `"A1"`.
    pub number: SeatNumber,
    /// Row index within the layout.
    pub row: u32,
    /// Column index within the layout.
    pub column: u32,
}

/// Static seat configuration of a bus, sourced from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatConfig {
    /// Number of rows in the layout.
    pub rows: u32,
    /// Number of columns in the layout.
    pub columns: u32,
    /// Every seat position in the layout.
    pub seats: Vec<SeatPosition>,
}

impl SeatConfig {
    /// Whether the configuration contains the given seat label.
    pub fn contains(&self, seat: &SeatNumber) -> bool {
        self.seats.iter().any(|s| &s.number == seat)
    }
}

/// One classified seat in a trip's seat map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    /// Seat label.
    pub number: SeatNumber,
    /// Row index.
    pub row: u32,
    /// Column index.
    pub column: u32,
    /// Current classification.
    pub status: SeatStatus,
    /// Per-seat price (the trip's flat price).
    pub price: Decimal,
}

/// The full seat map for a trip, one entry per configured seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatLayout {
    /// The trip this map describes.
    pub trip_id: TripId,
    /// Number of rows.
    pub rows: u32,
    /// Number of columns.
    pub columns: u32,
    /// Classified seats in configuration order.
    pub seats: Vec<Seat>,
}
