//! Seat hold entity.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ridehub_core::types::{HolderId, HoldId, SeatNumber, TripId};

/// A temporary, time-bounded exclusive claim on one or more seats of a
/// trip by one actor.
///
/// Holds live only in the expiring store; expiry is enforced by the
/// store's TTL. An expired hold is logically absent even if its record
/// has not been physically removed yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hold {
    /// Opaque hold token handed to the client.
    pub id: HoldId,
    /// The trip the held seats belong to.
    pub trip_id: TripId,
    /// The held seats. Non-empty, unique, in request order.
    pub seats: Vec<SeatNumber>,
    /// The actor owning the hold (user or anonymous session).
    pub holder: HolderId,
    /// When the hold was acquired.
    pub created_at: DateTime<Utc>,
    /// When the hold lapses. Always `created_at` + hold duration, plus
    /// any accumulated extensions.
    pub expires_at: DateTime<Utc>,
}

impl Hold {
    /// Create a new hold expiring `ttl` from now.
    ///
    /// Duplicate seats in the request are dropped, preserving first
    /// occurrence order.
    pub fn new(trip_id: TripId, seats: Vec<SeatNumber>, holder: HolderId, ttl: Duration) -> Self {
        let mut unique = Vec::with_capacity(seats.len());
        for seat in seats {
            if !unique.contains(&seat) {
                unique.push(seat);
            }
        }
        let created_at = Utc::now();
        let expires_at = created_at
            + chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::seconds(0));

        Self {
            id: HoldId::new(),
            trip_id,
            seats: unique,
            holder,
            created_at,
            expires_at,
        }
    }

    /// Whether the stored expiry has passed. Defensive check on top of
    /// store TTL, since TTL precision is not guaranteed to the millisecond.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    /// Time remaining until expiry, zero if already expired.
    ///
    /// Used to recompute the TTL from *now* when re-arming store entries
    /// on extend.
    pub fn remaining_ttl(&self) -> Duration {
        (self.expires_at - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO)
    }

    /// Whether this hold covers every seat in `seats`.
    pub fn covers(&self, seats: &[SeatNumber]) -> bool {
        seats.iter().all(|s| self.seats.contains(s))
    }
}
