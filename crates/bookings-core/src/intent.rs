//! UI triggers and the intents they produce.
//!
//! Every click the page cares about is reduced to a [`Trigger`] plus the raw
//! `data-id` of the clicked element. [`Intent::from_trigger`] turns that pair
//! into a discrete command for the controller, or nothing when the click has
//! no usable booking reference.

use serde::{Deserialize, Serialize};

use crate::booking::BookingRef;

/// A page control that can be activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// A per-row "edit" button.
    Edit,
    /// A per-row "cancel" button.
    Cancel,
    /// The edit form's close button.
    Close,
    /// The "yes, cancel" button inside the confirmation modal.
    ConfirmCancel,
    /// The confirmation modal finished hiding.
    ModalHidden,
}

impl Trigger {
    /// Whether this trigger only makes sense with a booking reference.
    pub fn needs_booking(self) -> bool {
        matches!(self, Self::Edit | Self::Cancel)
    }
}

/// A command for the booking page controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "booking", rename_all = "snake_case")]
pub enum Intent {
    /// Populate and show the edit form for a booking.
    OpenEdit(BookingRef),
    /// Hide the edit form.
    CloseEdit,
    /// Start cancelling a booking.
    RequestCancel(BookingRef),
    /// Confirm the pending cancellation.
    ConfirmCancel,
    /// The pending cancellation was dismissed.
    DismissCancel,
}

impl Intent {
    /// Maps a trigger and the clicked element's `data-id` to an intent.
    ///
    /// Returns `None` for edit and cancel triggers without a resolvable
    /// booking reference.
    pub fn from_trigger(trigger: Trigger, raw_booking: Option<&str>) -> Option<Self> {
        match trigger {
            Trigger::Edit => BookingRef::resolve(raw_booking).map(Self::OpenEdit),
            Trigger::Cancel => BookingRef::resolve(raw_booking).map(Self::RequestCancel),
            Trigger::Close => Some(Self::CloseEdit),
            Trigger::ConfirmCancel => Some(Self::ConfirmCancel),
            Trigger::ModalHidden => Some(Self::DismissCancel),
        }
    }

    /// Returns the booking this intent targets, if any.
    pub fn booking(&self) -> Option<&BookingRef> {
        match self {
            Self::OpenEdit(booking) | Self::RequestCancel(booking) => Some(booking),
            Self::CloseEdit | Self::ConfirmCancel | Self::DismissCancel => None,
        }
    }

    /// Short name used in log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenEdit(_) => "open_edit",
            Self::CloseEdit => "close_edit",
            Self::RequestCancel(_) => "request_cancel",
            Self::ConfirmCancel => "confirm_cancel",
            Self::DismissCancel => "dismiss_cancel",
        }
    }
}
