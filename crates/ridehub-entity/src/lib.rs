//! # ridehub-entity
//!
//! Domain entity models for the RideHub seat-hold core: holds, bookings,
//! passengers, fares, trips, and seat layout types, plus the traits for
//! the trip-catalog and booking-store collaborators.

pub mod booking;
pub mod hold;
pub mod seat;
pub mod store;
pub mod trip;

pub use booking::{Booking, BookingStatus, FareBreakdown, Passenger};
pub use hold::Hold;
pub use seat::{Seat, SeatConfig, SeatLayout, SeatPosition, SeatStatus};
pub use store::{BookingStore, TripCatalog};
pub use trip::Trip;
