//! # ridehub-core
//!
//! Core crate for the RideHub seat-hold subsystem. Contains the unified
//! error system, configuration schemas, typed identifiers, and the
//! expiring-store trait that the lock manager is built against. The
//! entity-returning collaborator traits (trip catalog, booking store)
//! live in `ridehub-entity` next to the types they return.
//!
//! This crate has **no** internal dependencies on other RideHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
