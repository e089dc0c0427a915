//! `PageHost` over the browser DOM.

use bookings_controller::{
    CONFIG_ELEMENT_ID, ControllerError, ControllerResult, ElementIds, PageConfig, PageHost,
    ScrollMode,
};
use bookings_core::FormVisibility;
use tracing::debug;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    ScrollBehavior, ScrollIntoViewOptions, Window,
};

use crate::page::{FieldKind, config_from_script, visible_text};

#[wasm_bindgen]
extern "C" {
    /// `bootstrap.Modal` from the page's Bootstrap bundle.
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Modal)]
    type BootstrapModal;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Modal")]
    fn new(element: &Element) -> Result<BootstrapModal, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &BootstrapModal);
}

/// Converts a thrown JS value into a controller error.
pub(crate) fn js_error(err: JsValue) -> ControllerError {
    ControllerError::dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// The live booking page.
pub struct WebPage {
    window: Window,
    document: Document,
    ids: ElementIds,
    modal: Option<BootstrapModal>,
}

impl WebPage {
    /// Wraps the current window's document.
    pub fn current(ids: ElementIds) -> ControllerResult<Self> {
        let window = web_sys::window().ok_or_else(|| ControllerError::dom("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| ControllerError::dom("no document"))?;
        Ok(Self {
            window,
            document,
            ids,
            modal: None,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> ControllerResult<Element> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| ControllerError::missing_elements([id]))
    }
}

/// Reads the page configuration script, defaults when absent.
pub fn read_config(document: &Document) -> ControllerResult<PageConfig> {
    let script = document.get_element_by_id(CONFIG_ELEMENT_ID);
    if script.is_none() {
        debug!("no page configuration, using defaults");
    }
    config_from_script(script.map(|element| element.text_content().unwrap_or_default()))
}

impl PageHost for WebPage {
    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn text_of(&self, id: &str) -> Option<String> {
        let element = self.document.get_element_by_id(id)?;
        let inner_text = element.dyn_ref::<HtmlElement>().map(HtmlElement::inner_text);
        visible_text(inner_text, element.text_content())
    }

    fn set_field_value(&mut self, value: &str) -> ControllerResult<()> {
        let field = self.element(&self.ids.people_field)?;
        match FieldKind::from_tag(&field.tag_name()) {
            FieldKind::Select => {
                if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
                    select.set_value(value);
                    return Ok(());
                }
            }
            FieldKind::Input => {
                if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
                    input.set_value(value);
                    return Ok(());
                }
            }
            FieldKind::Attribute => {}
        }
        field.set_attribute("value", value).map_err(js_error)
    }

    fn set_form_action(&mut self, action: &str) -> ControllerResult<()> {
        let form = self.element(&self.ids.edit_form)?;
        match form.dyn_ref::<HtmlFormElement>() {
            Some(form) => form.set_action(action),
            None => form.set_attribute("action", action).map_err(js_error)?,
        }
        Ok(())
    }

    fn set_form_visibility(&mut self, visibility: FormVisibility) -> ControllerResult<()> {
        let form = self.element(&self.ids.edit_form)?;
        let form = form
            .dyn_ref::<HtmlElement>()
            .ok_or_else(|| ControllerError::dom("edit form is not an HTML element"))?;
        form.style()
            .set_property("display", visibility.css_display())
            .map_err(js_error)
    }

    fn scroll_form_into_view(&mut self, mode: ScrollMode) {
        let Ok(form) = self.element(&self.ids.edit_form) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Instant,
        });
        form.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }

    fn show_cancel_modal(&mut self) -> ControllerResult<()> {
        if self.modal.is_none() {
            let container = self.element(&self.ids.cancel_modal)?;
            self.modal = Some(BootstrapModal::new(&container).map_err(js_error)?);
        }
        if let Some(modal) = &self.modal {
            modal.show();
        }
        Ok(())
    }

    fn navigate(&mut self, path: &str) -> ControllerResult<()> {
        self.window.location().set_href(path).map_err(js_error)
    }
}
