//! Server endpoints reached by the booking page.
//!
//! The page never talks to the server directly: it either points the edit
//! form at an endpoint or navigates the browser to one.
//!
//! # Example
//!
//! ```
//! use bookings_core::{BookingRef, Routes};
//!
//! let routes = Routes::default();
//! let booking = BookingRef::resolve(Some("42")).unwrap();
//! assert_eq!(routes.edit_booking(&booking), "/booking/edit-booking/42/");
//! assert_eq!(routes.cancel_booking(&booking), "/booking/cancel-booking/42/");
//! ```

use serde::{Deserialize, Serialize};

use crate::booking::BookingRef;

/// Default mount point of the booking application on the server.
pub const DEFAULT_BASE_PATH: &str = "/booking";

/// Builder for booking endpoint paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Routes {
    /// Path prefix all booking endpoints live under.
    pub base_path: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl Routes {
    /// Creates routes mounted under the given prefix.
    pub fn new(base_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Edit submission target for a booking.
    pub fn edit_booking(&self, booking: &BookingRef) -> String {
        self.join(&["edit-booking", &segment(booking.as_str())])
    }

    /// Cancellation endpoint for a booking.
    pub fn cancel_booking(&self, booking: &BookingRef) -> String {
        self.join(&["cancel-booking", &segment(booking.as_str())])
    }

    fn join(&self, segments: &[&str]) -> String {
        let base = self.base_path.trim_end_matches('/');
        let mut path = String::with_capacity(base.len() + 32);
        if !base.is_empty() && !base.starts_with('/') {
            path.push('/');
        }
        path.push_str(base);
        for segment in segments {
            path.push('/');
            path.push_str(segment);
        }
        path.push('/');
        path
    }
}

/// Encodes a value as a single path segment.
fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
