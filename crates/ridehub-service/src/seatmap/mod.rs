//! Seat availability resolution and hold operations.

pub mod service;

pub use service::SeatSelectionService;
