//! String-backed identifiers: seat numbers and holder ids.
//!
//! Seat numbers are human-facing labels (`"A1"`, `"12C"`) sourced from the
//! bus configuration, not UUIDs. Holders may be registered users or
//! anonymous sessions, so the holder id is an opaque string as well.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A seat label within a bus layout, e.g. `"A1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeatNumber(String);

impl SeatNumber {
    /// Create a seat number from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The seat label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SeatNumber {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SeatNumber {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The actor owning a hold or booking: a user id or an anonymous
/// session token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolderId(String);

impl HolderId {
    /// Create a holder id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The holder id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for HolderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for HolderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
