//! # ridehub-cache
//!
//! Expiring store implementations for RideHub. Supports two modes:
//!
//! - **memory**: In-process store with per-entry TTL
//! - **redis**: Redis-backed store using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration. Hold
//! correctness depends on per-entry TTL being honoured exactly, so both
//! providers treat an entry past its expiry as absent even before it is
//! physically removed.

pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use provider::CacheManager;
