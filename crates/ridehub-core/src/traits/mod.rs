//! Trait definitions for pluggable backends.

pub mod cache;

pub use cache::CacheProvider;
