//! Passenger details carried on a booking.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Contact and identity details for one passenger. One passenger per
/// booked seat.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Passenger {
    /// Passenger name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    /// Contact email address.
    #[validate(email(message = "email is invalid"))]
    pub email: String,
}

impl Passenger {
    /// Create a passenger record.
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}
