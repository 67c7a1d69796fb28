//! # ridehub-service
//!
//! Business logic service layer for RideHub. The seat-selection service
//! composes the lock manager with the trip catalog to produce classified
//! seat maps and hold operations; the booking service implements the
//! hold-to-booking handoff.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod booking;
pub mod catalog;
pub mod seatmap;

pub use booking::{BookingService, MemoryBookingStore};
pub use catalog::MemoryTripCatalog;
pub use seatmap::SeatSelectionService;
