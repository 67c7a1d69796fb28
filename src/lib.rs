//! # RideHub
//!
//! Seat-hold concurrency core for bus ticketing: time-bounded seat
//! holds in an expiring store, seat-map availability resolution, and
//! the hold-to-booking handoff.
//!
//! This crate is a facade over the workspace crates for consumers that
//! want a single dependency.

pub use ridehub_cache as cache;
pub use ridehub_core as core;
pub use ridehub_entity as entity;
pub use ridehub_lock as lock;
pub use ridehub_service as service;
