//! Booking page controller
//!
//! Binds the "My bookings" page: edit buttons populate and reveal the shared
//! edit form, cancel buttons confirm and navigate to the cancel endpoint.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;

#[cfg(test)]
mod fake;

pub use config::{CONFIG_ELEMENT_ID, CancelFlow, ElementIds, PageConfig, ScrollMode};
pub use controller::{BookingPageController, Outcome};
pub use error::{ControllerError, ControllerResult};
pub use host::PageHost;
