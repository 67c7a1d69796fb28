//! # ridehub-lock
//!
//! The seat lock manager: hands out and revokes time-bounded exclusive
//! holds on seat sets, backed entirely by an expiring store. No
//! in-process state, so the manager is horizontally stateless and safe
//! behind multiple service instances.

pub mod manager;
pub mod outcome;

pub use manager::SeatLockManager;
pub use outcome::{AcquireOutcome, ExtendOutcome, HoldConflict, ReleaseOutcome};
