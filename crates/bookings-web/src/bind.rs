//! Attaches the listener plan to the live page.

use std::cell::RefCell;
use std::rc::Rc;

use bookings_controller::{BookingPageController, ControllerError, ControllerResult};
use bookings_core::Trigger;
use tracing::{debug, error, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use crate::dom::{WebPage, js_error};
use crate::plan::{Binding, Target};

/// Controller shared by every listener on the page.
pub type SharedController = Rc<RefCell<BookingPageController<WebPage>>>;

/// Attaches one listener per element matched by the plan.
pub fn bind(
    controller: &SharedController,
    document: &Document,
    plan: &[Binding],
) -> ControllerResult<()> {
    for binding in plan {
        let elements = targets(document, &binding.target);
        if elements.is_empty() {
            if binding.required {
                let Target::Id(id) = &binding.target else {
                    continue;
                };
                return Err(ControllerError::missing_elements([id.as_str()]));
            }
            debug!(target = ?binding.target, "no elements to bind");
            continue;
        }
        for element in elements {
            listen(controller, element, binding.event, binding.trigger)?;
        }
    }
    Ok(())
}

fn targets(document: &Document, target: &Target) -> Vec<Element> {
    match target {
        Target::Id(id) => document.get_element_by_id(id).into_iter().collect(),
        Target::Class(class) => {
            let collection = document.get_elements_by_class_name(class);
            (0..collection.length())
                .filter_map(|i| collection.item(i))
                .collect()
        }
    }
}

fn listen(
    controller: &SharedController,
    element: Element,
    event: &'static str,
    trigger: Trigger,
) -> ControllerResult<()> {
    let controller = Rc::clone(controller);
    let source = element.clone();
    let closure = Closure::wrap(Box::new(move |_: Event| {
        let raw_booking = if trigger.needs_booking() {
            source.get_attribute("data-id")
        } else {
            None
        };
        let Ok(mut controller) = controller.try_borrow_mut() else {
            warn!(?trigger, "controller busy, event dropped");
            return;
        };
        if let Err(err) = controller.handle(trigger, raw_booking.as_deref()) {
            error!(?trigger, %err, "booking page action failed");
        }
    }) as Box<dyn FnMut(Event)>);

    element
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    // listeners live as long as the page
    closure.forget();
    Ok(())
}
