//! The booking page controller.
//!
//! One controller is attached per page load. Every click is reduced to an
//! [`Intent`] and handed to [`BookingPageController::dispatch`], which applies
//! it to the page through the [`PageHost`].
//!
//! Cancellation in the modal flow goes through a single pending slot: a cancel
//! request fills it, confirming takes it, dismissing clears it. A confirm can
//! therefore fire at most once per cancel request, and only for the booking
//! that was requested last.

use bookings_core::{BookingRef, FormVisibility, Intent, PeopleCount, Trigger};
use tracing::{debug, info, warn};

use crate::config::{CancelFlow, PageConfig};
use crate::error::{ControllerError, ControllerResult};
use crate::host::PageHost;

/// What dispatching an intent did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The edit form now targets this booking.
    FormOpened(BookingRef),
    /// The edit form was hidden.
    FormClosed,
    /// The modal is up, waiting for confirmation of this booking.
    AwaitingConfirmation(BookingRef),
    /// The user declined cancelling this booking.
    Declined(BookingRef),
    /// The browser was sent to this path.
    Navigated(String),
    /// Nothing happened.
    Ignored,
}

/// Translates page intents into form changes and navigations.
#[derive(Debug)]
pub struct BookingPageController<H> {
    host: H,
    config: PageConfig,
    pending_cancel: Option<BookingRef>,
}

impl<H: PageHost> BookingPageController<H> {
    /// Attaches to a page, checking every element the configured flow needs.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::MissingElements`] naming every absent
    /// element; nothing is bound in that case.
    pub fn attach(host: H, config: PageConfig) -> ControllerResult<Self> {
        let missing: Vec<&str> = config
            .required_ids()
            .into_iter()
            .filter(|id| !host.has_element(id))
            .collect();
        if !missing.is_empty() {
            return Err(ControllerError::missing_elements(missing));
        }

        info!(flow = ?config.cancel_flow, "booking page controller attached");
        Ok(Self {
            host,
            config,
            pending_cancel: None,
        })
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Booking awaiting modal confirmation, if any.
    pub fn pending_cancel(&self) -> Option<&BookingRef> {
        self.pending_cancel.as_ref()
    }

    /// Handles a raw click: the trigger and the clicked element's `data-id`.
    ///
    /// A booking trigger without a usable reference is ignored.
    pub fn handle(
        &mut self,
        trigger: Trigger,
        raw_booking: Option<&str>,
    ) -> ControllerResult<Outcome> {
        match Intent::from_trigger(trigger, raw_booking) {
            Some(intent) => self.dispatch(intent),
            None => {
                warn!(?trigger, "click without booking reference ignored");
                Ok(Outcome::Ignored)
            }
        }
    }

    /// Applies an intent to the page.
    pub fn dispatch(&mut self, intent: Intent) -> ControllerResult<Outcome> {
        debug!(intent = intent.name(), booking = ?intent.booking(), "dispatch");
        match intent {
            Intent::OpenEdit(booking) => self.open_edit(booking),
            Intent::CloseEdit => self.close_edit(),
            Intent::RequestCancel(booking) => self.request_cancel(booking),
            Intent::ConfirmCancel => self.confirm_cancel(),
            Intent::DismissCancel => {
                if let Some(booking) = self.pending_cancel.take() {
                    debug!(%booking, "cancellation dismissed");
                }
                Ok(Outcome::Ignored)
            }
        }
    }

    fn open_edit(&mut self, booking: BookingRef) -> ControllerResult<Outcome> {
        let row_id = self.config.elements.people_row_id(&booking);
        let people = self
            .host
            .text_of(&row_id)
            .map(PeopleCount::new)
            .ok_or_else(|| ControllerError::missing_row(booking.clone()))?;
        if !people.is_offered_choice() {
            debug!(%booking, %people, "party size is not one of the form's choices");
        }

        self.host.set_field_value(people.as_str())?;
        self.host
            .set_form_action(&self.config.routes.edit_booking(&booking))?;
        self.host.set_form_visibility(FormVisibility::Shown)?;
        self.host.scroll_form_into_view(self.config.scroll);

        Ok(Outcome::FormOpened(booking))
    }

    fn close_edit(&mut self) -> ControllerResult<Outcome> {
        self.host.set_form_visibility(FormVisibility::Hidden)?;
        Ok(Outcome::FormClosed)
    }

    fn request_cancel(&mut self, booking: BookingRef) -> ControllerResult<Outcome> {
        match self.config.cancel_flow {
            CancelFlow::ConfirmDialog => {
                if self.host.confirm(&self.config.confirm_message) {
                    self.navigate_to_cancel(&booking)
                } else {
                    debug!(%booking, "cancellation declined");
                    Ok(Outcome::Declined(booking))
                }
            }
            CancelFlow::Modal => {
                if let Some(stale) = self.pending_cancel.replace(booking.clone()) {
                    debug!(%stale, "replacing unconfirmed cancellation");
                }
                if let Err(err) = self.host.show_cancel_modal() {
                    self.pending_cancel = None;
                    return Err(err);
                }
                Ok(Outcome::AwaitingConfirmation(booking))
            }
        }
    }

    fn confirm_cancel(&mut self) -> ControllerResult<Outcome> {
        match self.pending_cancel.take() {
            Some(booking) => self.navigate_to_cancel(&booking),
            None => {
                debug!("confirm without pending cancellation ignored");
                Ok(Outcome::Ignored)
            }
        }
    }

    fn navigate_to_cancel(&mut self, booking: &BookingRef) -> ControllerResult<Outcome> {
        let path = self.config.routes.cancel_booking(booking);
        info!(%booking, %path, "cancelling booking");
        self.host.navigate(&path)?;
        Ok(Outcome::Navigated(path))
    }
}
