//! Browser-independent decisions of the DOM host.

use bookings_controller::{ControllerResult, PageConfig};

/// How the people-count field takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `<select>`: the value picks an option.
    Select,
    /// `<input>`: the value is written directly.
    Input,
    /// Anything else gets a `value` attribute.
    Attribute,
}

impl FieldKind {
    /// Classifies an element by its tag name (`tagName` is upper case in HTML).
    pub fn from_tag(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("select") {
            Self::Select
        } else if tag.eq_ignore_ascii_case("input") {
            Self::Input
        } else {
            Self::Attribute
        }
    }
}

/// Visible text of an element: rendered text for HTML elements, raw text
/// content otherwise.
pub fn visible_text(inner_text: Option<String>, text_content: Option<String>) -> Option<String> {
    inner_text.or(text_content)
}

/// Configuration from the optional config script's text.
pub fn config_from_script(script_text: Option<String>) -> ControllerResult<PageConfig> {
    match script_text {
        Some(json) => PageConfig::from_json(&json),
        None => Ok(PageConfig::default()),
    }
}
