//! Booking types read from the server-rendered page.
//!
//! This module provides the small value types the page controller moves around:
//! - [`BookingRef`]: the opaque booking identifier carried by trigger buttons
//! - [`PeopleCount`]: the party size text shown in a booking row
//! - [`FormVisibility`]: whether the shared edit form is shown

use std::fmt;

use serde::{Deserialize, Serialize};

/// Party sizes the server-side edit form offers as choices.
pub const PARTY_SIZES: std::ops::RangeInclusive<u32> = 1..=6;

/// Opaque identifier correlating a row or button with a server-side booking.
///
/// The value is kept exactly as rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingRef(String);

impl BookingRef {
    /// Resolves a booking reference from a raw `data-id` attribute value.
    ///
    /// The value is kept verbatim. Returns `None` when the attribute is absent
    /// or blank, so that a click without a reference never turns into a
    /// navigation.
    pub fn resolve(raw: Option<&str>) -> Option<Self> {
        let value = raw?;
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value.to_string()))
        }
    }

    /// Returns the reference as rendered by the server.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of people shown for a booking, copied verbatim into the edit field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PeopleCount(String);

impl PeopleCount {
    /// Wraps the displayed text without coercion.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the text exactly as displayed.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the text names one of the party sizes the edit form offers.
    pub fn is_offered_choice(&self) -> bool {
        self.0
            .trim()
            .parse::<u32>()
            .is_ok_and(|n| PARTY_SIZES.contains(&n))
    }
}

impl fmt::Display for PeopleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Visibility of the shared edit form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormVisibility {
    /// Hidden, as rendered on page load.
    #[default]
    Hidden,
    /// Shown after an edit trigger was clicked.
    Shown,
}

impl FormVisibility {
    /// Returns the CSS `display` value for this state.
    pub fn css_display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Shown => "block",
        }
    }
}
