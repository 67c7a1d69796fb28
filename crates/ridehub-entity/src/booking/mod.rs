//! Booking domain entities.

pub mod fare;
pub mod model;
pub mod passenger;

pub use fare::FareBreakdown;
pub use model::{Booking, BookingStatus};
pub use passenger::Passenger;
