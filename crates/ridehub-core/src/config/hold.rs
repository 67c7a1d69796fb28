//! Seat-hold lifecycle configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Seat-hold lifecycle configuration.
///
/// The hold duration is deliberately generous relative to client round
/// trips: correctness of the lock manager relies on the store's per-key
/// atomicity plus this window, not on any in-process locking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoldConfig {
    /// How long an acquired hold lives before the store evicts it, in seconds.
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: u64,
    /// Upper bound on a single extension request, in minutes.
    #[serde(default = "default_max_extension")]
    pub max_extension_minutes: u64,
}

impl HoldConfig {
    /// The hold TTL as a [`Duration`].
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_seconds)
    }

    /// The extension cap as a [`Duration`].
    pub fn max_extension(&self) -> Duration {
        Duration::from_secs(self.max_extension_minutes * 60)
    }
}

impl Default for HoldConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_ttl_seconds(),
            max_extension_minutes: default_max_extension(),
        }
    }
}

fn default_ttl_seconds() -> u64 {
    600
}

fn default_max_extension() -> u64 {
    10
}
