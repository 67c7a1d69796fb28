//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ridehub_core::types::{BookingId, HolderId, HoldId, SeatNumber, TripId};

use super::fare::FareBreakdown;
use super::passenger::Passenger;

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created, payment not yet resolved. The originating hold is still
    /// active so the seats stay claimed while payment is in flight.
    Pending,
    /// Payment succeeded; the terminal state of a successful purchase.
    Confirmed,
    /// Cancelled by the holder or by payment failure.
    Cancelled,
}

/// A durable claim on seats, distinguished from a hold by persistence
/// and by being the terminal state of a successful purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    /// Booking identifier.
    pub id: BookingId,
    /// Human-facing record locator (10 alphanumeric characters).
    pub pnr: String,
    /// The trip the booked seats belong to.
    pub trip_id: TripId,
    /// The actor who made the booking.
    pub holder: HolderId,
    /// The hold this booking was converted from. Persisted so the
    /// failure path can find and release the right hold.
    pub hold_id: HoldId,
    /// The booked seats.
    pub seats: Vec<SeatNumber>,
    /// One passenger per seat.
    pub passengers: Vec<Passenger>,
    /// Price breakdown at booking time.
    pub fare: FareBreakdown,
    /// Current lifecycle state.
    pub status: BookingStatus,
    /// Payment reference attached on confirmation.
    pub payment_reference: Option<String>,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// When the booking was confirmed.
    pub confirmed_at: Option<DateTime<Utc>>,
    /// When the booking was cancelled.
    pub cancelled_at: Option<DateTime<Utc>>,
    /// Why the booking was cancelled.
    pub cancellation_reason: Option<String>,
}

impl Booking {
    /// Whether the booking is still awaiting payment resolution.
    pub fn is_pending(&self) -> bool {
        self.status == BookingStatus::Pending
    }

    /// Whether the booking is confirmed.
    pub fn is_confirmed(&self) -> bool {
        self.status == BookingStatus::Confirmed
    }

    /// Whether the booking references the given seat.
    pub fn has_seat(&self, seat: &SeatNumber) -> bool {
        self.seats.contains(seat)
    }
}
