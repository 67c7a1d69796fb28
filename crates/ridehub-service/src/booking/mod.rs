//! Booking handoff: converting live holds into durable bookings.

pub mod memory;
pub mod pnr;
pub mod service;

pub use memory::MemoryBookingStore;
pub use service::BookingService;
