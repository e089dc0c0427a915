//! The page seam between the controller and the DOM.

use bookings_core::FormVisibility;

use crate::config::ScrollMode;
use crate::error::ControllerResult;

/// Access to the booking page.
///
/// The real implementation wraps the browser DOM; tests use an in-memory page.
/// "The form", "the field" and "the modal" are the elements named by the
/// controller's [`ElementIds`](crate::config::ElementIds), which the host is
/// built with.
pub trait PageHost {
    /// Whether an element with this id exists.
    fn has_element(&self, id: &str) -> bool;

    /// Visible text of the element with this id.
    fn text_of(&self, id: &str) -> Option<String>;

    /// Writes the people-count field.
    fn set_field_value(&mut self, value: &str) -> ControllerResult<()>;

    /// Points the edit form at a submission target.
    fn set_form_action(&mut self, action: &str) -> ControllerResult<()>;

    /// Shows or hides the edit form.
    fn set_form_visibility(&mut self, visibility: FormVisibility) -> ControllerResult<()>;

    /// Scrolls the edit form into view.
    fn scroll_form_into_view(&mut self, mode: ScrollMode);

    /// Asks a blocking yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Shows the cancellation modal without blocking.
    fn show_cancel_modal(&mut self) -> ControllerResult<()>;

    /// Navigates the browser away from the page.
    fn navigate(&mut self, path: &str) -> ControllerResult<()>;
}
