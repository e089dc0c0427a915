//! Which listeners the page gets.
//!
//! The listener plan is plain data so it can be checked without a browser;
//! the DOM binder walks it and attaches one listener per matching element.

use bookings_controller::{CancelFlow, PageConfig};
use bookings_core::Trigger;

/// Event Bootstrap fires on the modal container once it is fully hidden.
pub const MODAL_HIDDEN_EVENT: &str = "hidden.bs.modal";

/// How listener targets are found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// A single element by id.
    Id(String),
    /// Every element carrying a class.
    Class(String),
}

/// One listener to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub target: Target,
    pub event: &'static str,
    pub trigger: Trigger,
    /// Whether the target must exist. Class targets may match nothing.
    pub required: bool,
}

impl Binding {
    fn click(target: Target, trigger: Trigger, required: bool) -> Self {
        Self {
            target,
            event: "click",
            trigger,
            required,
        }
    }
}

/// Listeners for the configured page.
pub fn listener_plan(config: &PageConfig) -> Vec<Binding> {
    let ids = &config.elements;
    let modal = config.cancel_flow == CancelFlow::Modal;

    let mut plan = vec![
        Binding::click(Target::Class(ids.edit_class.clone()), Trigger::Edit, false),
        Binding::click(Target::Class(ids.cancel_class.clone()), Trigger::Cancel, false),
        Binding::click(Target::Id(ids.close_button.clone()), Trigger::Close, modal),
    ];

    if modal {
        plan.push(Binding::click(
            Target::Id(ids.confirm_cancel.clone()),
            Trigger::ConfirmCancel,
            true,
        ));
        plan.push(Binding {
            target: Target::Id(ids.cancel_modal.clone()),
            event: MODAL_HIDDEN_EVENT,
            trigger: Trigger::ModalHidden,
            required: true,
        });
    }

    plan
}
