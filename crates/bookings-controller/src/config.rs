//! Page configuration.
//!
//! The server may embed a JSON object in the page to override element ids,
//! endpoint prefix, or the cancellation flow:
//!
//! ```html
//! <script type="application/json" id="bookingPageConfig">
//!   {"cancel_flow": "modal", "routes": {"base_path": "/booking"}}
//! </script>
//! ```
//!
//! Every section is optional; missing keys take their defaults.

use bookings_core::{BookingRef, Routes, TracingConfig};
use serde::{Deserialize, Serialize};

use crate::error::{ControllerError, ControllerResult};

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "bookingPageConfig";

// ---------------------------------------------------------------------------
// PageConfig
// ---------------------------------------------------------------------------

/// Configuration for the booking page controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// How a cancel click is confirmed.
    pub cancel_flow: CancelFlow,

    /// Server endpoints.
    pub routes: Routes,

    /// Element ids and class markers.
    pub elements: ElementIds,

    /// Question asked by the confirm dialog flow.
    pub confirm_message: String,

    /// How the edit form is scrolled into view.
    pub scroll: ScrollMode,

    /// Console log level for the browser build.
    pub log_level: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            cancel_flow: CancelFlow::default(),
            routes: Routes::default(),
            elements: ElementIds::default(),
            confirm_message: "Are you sure you want to cancel this booking?".to_string(),
            scroll: ScrollMode::default(),
            log_level: "info".to_string(),
        }
    }
}

impl PageConfig {
    /// Parses a configuration from JSON.
    ///
    /// An unknown `log_level` is rejected here so a bad page configuration
    /// fails setup instead of silently logging at the default level.
    pub fn from_json(json: &str) -> ControllerResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(json)?;
        config.tracing_config()?;
        Ok(config)
    }

    /// Sets the cancellation flow.
    #[must_use]
    pub fn with_cancel_flow(mut self, flow: CancelFlow) -> Self {
        self.cancel_flow = flow;
        self
    }

    /// Ids of the elements that must exist for the configured flow.
    pub fn required_ids(&self) -> Vec<&str> {
        let e = &self.elements;
        let mut ids = vec![e.edit_form.as_str(), e.people_field.as_str()];
        if self.cancel_flow == CancelFlow::Modal {
            ids.extend([
                e.close_button.as_str(),
                e.cancel_modal.as_str(),
                e.confirm_cancel.as_str(),
            ]);
        }
        ids
    }

    /// Tracing configuration derived from `log_level`.
    pub fn tracing_config(&self) -> ControllerResult<TracingConfig> {
        TracingConfig::default()
            .with_level_name(&self.log_level)
            .map_err(|e| ControllerError::config(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// How a cancel click is confirmed before navigating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelFlow {
    /// Blocking `window.confirm` dialog.
    #[default]
    ConfirmDialog,
    /// Bootstrap modal with a separate confirm button.
    Modal,
}

/// Scroll behaviour when revealing the edit form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollMode {
    #[default]
    Smooth,
    Instant,
}

/// Element ids and class markers the controller looks up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// The shared edit form.
    pub edit_form: String,
    /// The people-count field inside the edit form.
    pub people_field: String,
    /// Close button of the edit form.
    pub close_button: String,
    /// Container of the cancellation modal.
    pub cancel_modal: String,
    /// "Yes, cancel" button inside the modal.
    pub confirm_cancel: String,
    /// Class carried by every edit button.
    pub edit_class: String,
    /// Class carried by every cancel button.
    pub cancel_class: String,
    /// Prefix of the per-row people display ids (`people42`).
    pub people_row_prefix: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            edit_form: "editForm".to_string(),
            people_field: "id_number_of_people".to_string(),
            close_button: "closeButton".to_string(),
            cancel_modal: "cancelModal".to_string(),
            confirm_cancel: "confirmCancel".to_string(),
            edit_class: "btn-edit".to_string(),
            cancel_class: "btn-cancel".to_string(),
            people_row_prefix: "people".to_string(),
        }
    }
}

impl ElementIds {
    /// Id of the element displaying a booking's party size.
    pub fn people_row_id(&self, booking: &BookingRef) -> String {
        format!("{}{}", self.people_row_prefix, booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_json() {
        insta::assert_json_snapshot!(PageConfig::default(), @r#"
        {
          "cancel_flow": "confirm_dialog",
          "routes": {
            "base_path": "/booking"
          },
          "elements": {
            "edit_form": "editForm",
            "people_field": "id_number_of_people",
            "close_button": "closeButton",
            "cancel_modal": "cancelModal",
            "confirm_cancel": "confirmCancel",
            "edit_class": "btn-edit",
            "cancel_class": "btn-cancel",
            "people_row_prefix": "people"
          },
          "confirm_message": "Are you sure you want to cancel this booking?",
          "scroll": "smooth",
          "log_level": "info"
        }
        "#);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(PageConfig::from_json("").unwrap(), PageConfig::default());
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = PageConfig::from_json(
            r#"{"cancel_flow": "modal", "elements": {"edit_form": "bookingEdit"}}"#,
        )
        .unwrap();
        assert_eq!(config.cancel_flow, CancelFlow::Modal);
        assert_eq!(config.elements.edit_form, "bookingEdit");
        assert_eq!(config.elements.people_field, "id_number_of_people");
        assert_eq!(config.routes, Routes::default());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PageConfig::from_json(r#"{"cancel_flow": "telepathy"}"#).unwrap_err();
        assert!(matches!(err, ControllerError::Config { .. }));
    }

    #[test]
    fn unknown_log_level_is_config_error() {
        let err = PageConfig::from_json(r#"{"log_level": "chatty"}"#).unwrap_err();
        match err {
            ControllerError::Config { message } => {
                assert_eq!(message, "unknown log level: chatty");
            }
            other => panic!("unexpected error: {other}"),
        }

        let config = PageConfig::from_json(r#"{"log_level": "WARN"}"#).unwrap();
        assert_eq!(
            config.tracing_config().unwrap().default_level,
            tracing::Level::WARN
        );
    }

    #[test]
    fn required_ids_follow_flow() {
        let dialog = PageConfig::default();
        assert_eq!(dialog.required_ids(), vec!["editForm", "id_number_of_people"]);

        let modal = PageConfig::default().with_cancel_flow(CancelFlow::Modal);
        assert_eq!(
            modal.required_ids(),
            vec![
                "editForm",
                "id_number_of_people",
                "closeButton",
                "cancelModal",
                "confirmCancel"
            ]
        );
    }

    #[test]
    fn people_row_id() {
        let booking = BookingRef::resolve(Some("42")).unwrap();
        assert_eq!(ElementIds::default().people_row_id(&booking), "people42");
    }

    #[test]
    fn tracing_level_from_config() {
        let mut config = PageConfig::default();
        config.log_level = "debug".to_string();
        assert_eq!(
            config.tracing_config().unwrap().default_level,
            tracing::Level::DEBUG
        );

        config.log_level = "chatty".to_string();
        assert!(config.tracing_config().is_err());
    }
}
