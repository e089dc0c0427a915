//! Controller error types.

use bookings_core::BookingRef;
use thiserror::Error;

/// Result type for controller operations.
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Errors that can occur while attaching to or driving the booking page.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Required page elements are absent; nothing was bound.
    #[error("missing page elements: {}", ids.join(", "))]
    MissingElements { ids: Vec<String> },

    /// The row showing a booking's party size is absent.
    #[error("no people display element for booking {booking}")]
    MissingRow { booking: BookingRef },

    /// The page configuration could not be read.
    #[error("configuration error: {message}")]
    Config { message: String },

    /// A browser API call failed.
    #[error("DOM error: {message}")]
    Dom { message: String },
}

impl ControllerError {
    /// Creates a missing elements error.
    pub fn missing_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingElements {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a missing row error.
    pub fn missing_row(booking: BookingRef) -> Self {
        Self::MissingRow { booking }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a DOM error.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ControllerError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("invalid page configuration: {}", err))
    }
}
