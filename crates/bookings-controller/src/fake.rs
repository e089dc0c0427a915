//! In-memory page used by the controller tests.

use std::collections::{HashMap, VecDeque};

use bookings_core::FormVisibility;

use crate::config::{ElementIds, ScrollMode};
use crate::error::{ControllerError, ControllerResult};
use crate::host::PageHost;

/// Records every effect the controller has on the page.
#[derive(Debug, Default)]
pub struct FakePage {
    elements: HashMap<String, String>,
    confirm_answers: VecDeque<bool>,
    pub field_value: String,
    pub form_action: String,
    pub visibility: FormVisibility,
    pub modal_shown: usize,
    pub navigations: Vec<String>,
    pub events: Vec<String>,
}

impl FakePage {
    /// The confirm dialog page: form and field only.
    pub fn dialog_page() -> Self {
        let ids = ElementIds::default();
        Self::default()
            .with_element(&ids.edit_form, "")
            .with_element(&ids.people_field, "")
    }

    /// The modal page: form, field, close button, modal and confirm button.
    pub fn modal_page() -> Self {
        let ids = ElementIds::default();
        Self::dialog_page()
            .with_element(&ids.close_button, "Close")
            .with_element(&ids.cancel_modal, "")
            .with_element(&ids.confirm_cancel, "Yes, Cancel")
    }

    pub fn with_element(mut self, id: &str, text: &str) -> Self {
        self.elements.insert(id.to_string(), text.to_string());
        self
    }

    pub fn without_element(mut self, id: &str) -> Self {
        self.remove_element(id);
        self
    }

    pub fn remove_element(&mut self, id: &str) {
        self.elements.remove(id);
    }

    /// Adds a booking row showing a party size.
    pub fn with_row(self, booking: &str, people: &str) -> Self {
        let id = format!("{}{}", ElementIds::default().people_row_prefix, booking);
        self.with_element(&id, people)
    }

    /// Queues the answer for the next confirm dialog.
    pub fn answering(mut self, answer: bool) -> Self {
        self.confirm_answers.push_back(answer);
        self
    }

    pub fn log(&self) -> String {
        self.events.join("\n")
    }
}

impl PageHost for FakePage {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn text_of(&self, id: &str) -> Option<String> {
        self.elements.get(id).cloned()
    }

    fn set_field_value(&mut self, value: &str) -> ControllerResult<()> {
        self.events.push(format!("field = {:?}", value));
        self.field_value = value.to_string();
        Ok(())
    }

    fn set_form_action(&mut self, action: &str) -> ControllerResult<()> {
        self.events.push(format!("action = {}", action));
        self.form_action = action.to_string();
        Ok(())
    }

    fn set_form_visibility(&mut self, visibility: FormVisibility) -> ControllerResult<()> {
        self.events.push(format!("form {}", visibility.css_display()));
        self.visibility = visibility;
        Ok(())
    }

    fn scroll_form_into_view(&mut self, mode: ScrollMode) {
        self.events.push(format!("scroll {:?}", mode));
    }

    fn confirm(&mut self, message: &str) -> bool {
        let answer = self.confirm_answers.pop_front().unwrap_or(false);
        self.events.push(format!("confirm {:?} -> {}", message, answer));
        answer
    }

    fn show_cancel_modal(&mut self) -> ControllerResult<()> {
        if !self.has_element(&ElementIds::default().cancel_modal) {
            return Err(ControllerError::dom("modal element vanished"));
        }
        self.events.push("modal shown".to_string());
        self.modal_shown += 1;
        Ok(())
    }

    fn navigate(&mut self, path: &str) -> ControllerResult<()> {
        self.events.push(format!("navigate {}", path));
        self.navigations.push(path.to_string());
        Ok(())
    }
}
