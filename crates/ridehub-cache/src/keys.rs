//! Store key builders for all RideHub entries.
//!
//! Centralising key construction prevents typos and keeps the lock
//! manager the only component shaping hold keys.

use ridehub_core::types::{HoldId, SeatNumber, TripId};

/// Prefix applied to all RideHub store keys.
const PREFIX: &str = "ridehub";

/// Key for a hold record: `ridehub:hold:{hold_id}`.
pub fn hold(hold_id: HoldId) -> String {
    format!("{PREFIX}:hold:{hold_id}")
}

/// Key for the seat-to-hold index entry of one seat on one trip:
/// `ridehub:seatlock:{trip_id}:{seat}`.
///
/// The entry exists iff the referenced hold is active, and always
/// carries the same TTL as the hold record.
pub fn seat_lock(trip_id: TripId, seat: &SeatNumber) -> String {
    format!("{PREFIX}:seatlock:{trip_id}:{seat}")
}
