//! Browser frontend for the booking page
//!
//! Compiled to wasm and loaded by the "My bookings" page. On start it reads
//! the optional page configuration, attaches a [`BookingPageController`] to
//! the document and wires every edit, cancel, close and confirm control to it.
//! A page missing required elements makes start-up throw.
//!
//! [`BookingPageController`]: bookings_controller::BookingPageController

pub mod page;
pub mod plan;

#[cfg(target_arch = "wasm32")]
pub mod bind;
#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use page::{FieldKind, config_from_script, visible_text};
pub use plan::{Binding, MODAL_HIDDEN_EVENT, Target, listener_plan};

#[cfg(target_arch = "wasm32")]
mod entry {
    use std::cell::RefCell;
    use std::rc::Rc;

    use bookings_controller::{BookingPageController, ControllerResult, PageConfig};
    use tracing::{error, info};
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::Event;

    use crate::bind::{SharedController, bind};
    use crate::dom::{WebPage, read_config};
    use crate::plan::listener_plan;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let config = read_config(&document).map_err(|e| JsValue::from_str(&e.to_string()))?;

        let level = config
            .tracing_config()
            .map_err(|e| JsValue::from_str(&e.to_string()))?
            .default_level;
        tracing_wasm::set_as_global_default_with_config(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(level)
                .build(),
        );

        if document.ready_state() == "loading" {
            let on_ready = Closure::once(move |_: Event| {
                if let Err(err) = mount(config) {
                    error!(%err, "booking page setup failed");
                    wasm_bindgen::throw_str(&err.to_string());
                }
            });
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_ready.as_ref().unchecked_ref(),
            )?;
            on_ready.forget();
            Ok(())
        } else {
            mount(config).map_err(|e| JsValue::from_str(&e.to_string()))
        }
    }

    fn mount(config: PageConfig) -> ControllerResult<()> {
        let plan = listener_plan(&config);
        let page = WebPage::current(config.elements.clone())?;
        let document = page.document().clone();
        let controller: SharedController =
            Rc::new(RefCell::new(BookingPageController::attach(page, config)?));
        bind(&controller, &document, &plan)?;

        info!(listeners = plan.len(), "booking page ready");
        Ok(())
    }
}
