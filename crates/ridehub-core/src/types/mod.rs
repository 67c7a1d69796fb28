//! Typed identifiers shared across the workspace.

pub mod id;
pub mod seat;

pub use id::{BookingId, BusId, HoldId, TripId};
pub use seat::{HolderId, SeatNumber};
