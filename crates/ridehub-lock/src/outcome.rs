//! Typed outcomes for hold operations.
//!
//! Contention is a normal, expected result of concurrent seat selection,
//! so it travels in `Ok` values rather than errors. Only store faults and
//! invalid input become [`AppError`](ridehub_core::AppError)s.

use serde::{Deserialize, Serialize};

use ridehub_core::types::SeatNumber;
use ridehub_entity::Hold;

/// Why an acquire request was rejected. Callers surface the difference
/// to the user ("seat taken just now" vs "seat sold").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HoldConflict {
    /// The seat is claimed by another live hold.
    AlreadyHeld {
        /// The first conflicting seat found.
        seat: SeatNumber,
    },
    /// The seat is referenced by a confirmed booking.
    AlreadyBooked {
        /// The first conflicting seat found.
        seat: SeatNumber,
    },
}

/// Result of an acquire request. A rejection leaves no side effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AcquireOutcome {
    /// All requested seats were free; the hold is live.
    Acquired(Hold),
    /// At least one requested seat conflicted; nothing was written.
    Rejected(HoldConflict),
}

/// Result of a release request.
///
/// `NotFound` is the common case on the timeout path (the hold already
/// expired) and is not an error for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseOutcome {
    /// The hold existed and its entries were deleted.
    Released,
    /// The hold was already gone (expired or unknown).
    NotFound,
}

/// Result of an extend request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ExtendOutcome {
    /// The hold and all its seat index entries were re-armed together.
    Extended(Hold),
    /// The hold was already gone (expired or unknown).
    NotFound,
}
