//! In-memory expiring store.

pub mod store;

pub use store::MemoryCacheProvider;
