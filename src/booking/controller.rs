// src/booking/controller.rs
//! Booking form state: validation side effects and the submission state machine

use std::ops::{Deref, DerefMut};
use tracing::{debug, error, info};

use super::events::{self, EventBinding, FormEvent, HandlerAction};
use super::models::{
    BookingField, BookingRequest, FormInput, SubmissionOutcome, SubmissionState, SubmitResult,
};
use super::validators::{self, FormValidator};
use super::view::{BookingView, DELIVERY_FAILED_NOTICE, SUBMITTING_LABEL, SUBMIT_LABEL};
use crate::common::{safe_phone_log, FieldError, ValidationResult, Validator};
use crate::services::MessageRelay;

/// Result of dispatching one UI event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    FieldChecked(BookingField, Result<(), FieldError>),
    Submitted(SubmitResult),
}

/// Owns the view and the relay for the lifetime of the page.
pub struct BookingForm<V, R> {
    view: V,
    relay: R,
    state: SubmissionState,
    bindings: Vec<EventBinding>,
}

impl<V, R> BookingForm<V, R>
where
    V: BookingView,
    R: MessageRelay,
{
    pub fn new(view: V, relay: R) -> Self {
        Self {
            view,
            relay,
            state: SubmissionState::Idle,
            bindings: events::bindings(),
        }
    }

    #[allow(dead_code)]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[allow(dead_code)]
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    #[allow(dead_code)]
    pub fn into_view(self) -> V {
        self.view
    }

    pub fn read_input(&self) -> FormInput {
        let mut input = FormInput::default();
        for field in BookingField::ALL {
            input.set(field, self.view.field_value(field));
        }
        input
    }

    /// Re-checks one field and refreshes its inline error.
    pub fn validate_field(&mut self, field: BookingField) -> Result<(), FieldError> {
        let outcome = validators::validate_field(field, &self.view.field_value(field));
        self.show_outcome(field, outcome);
        outcome
    }

    /// Checks every field, refreshing all inline errors. True iff all pass.
    /// This is the only gate in front of a submission.
    pub fn validate_form(&mut self) -> bool {
        let input = self.read_input();
        self.apply_validation(&input).is_valid
    }

    fn apply_validation(&mut self, input: &FormInput) -> ValidationResult {
        let result = FormValidator.validate(input);
        for field in BookingField::VALIDATED {
            let outcome = match result.error_for(field) {
                Some(e) => Err(e.kind),
                None => Ok(()),
            };
            self.show_outcome(field, outcome);
        }
        result
    }

    fn show_outcome(&mut self, field: BookingField, outcome: Result<(), FieldError>) {
        let message = outcome.err().map(|e| e.message());
        self.view.show_field_error(field, message);
    }

    /// Validates the form and, when it passes, delivers the booking.
    ///
    /// The submit control is disabled for the duration of the delivery and
    /// restored afterwards even if the relay fails, panics or the returned
    /// future is dropped.
    pub async fn submit(&mut self) -> SubmitResult {
        if self.state != SubmissionState::Idle {
            debug!(state = ?self.state, "Submit ignored");
            return SubmitResult::Ignored;
        }

        if !self.validate_form() {
            let validation = validators::validate_form(&self.read_input());
            let fields = validation.invalid_fields();
            debug!(
                fields = ?fields,
                codes = ?validation.errors.iter().map(|e| e.kind.code()).collect::<Vec<_>>(),
                "Booking rejected by validation"
            );
            return SubmitResult::Rejected(fields);
        }

        let request = BookingRequest::from_validated(&self.read_input());
        info!(
            service = %request.service,
            phone = %safe_phone_log(&request.phone),
            "Submitting booking"
        );

        let Self {
            view, relay, state, ..
        } = self;
        let mut guard = SubmitGuard::engage(view, state);

        let outcome = match relay.deliver(&request).await {
            Ok(()) => {
                guard.hide_form();
                guard.show_success();
                guard.complete();
                info!("Booking delivered");
                SubmissionOutcome::Success
            }
            Err(e) => {
                error!(error = %e, "Booking delivery failed");
                guard.alert(DELIVERY_FAILED_NOTICE);
                SubmissionOutcome::Failure(e.to_string())
            }
        };

        drop(guard);
        SubmitResult::Sent(outcome)
    }

    /// Runs the handler registered for `event` on `target_id`, if any.
    pub async fn dispatch(&mut self, event: FormEvent, target_id: &str) -> Option<DispatchOutcome> {
        let action = match events::find_binding(&self.bindings, event, target_id) {
            Some(binding) => binding.action,
            None => {
                debug!(event = %event, target = target_id, "No handler registered");
                return None;
            }
        };

        match action {
            HandlerAction::ValidateField(field) => Some(DispatchOutcome::FieldChecked(
                field,
                self.validate_field(field),
            )),
            HandlerAction::SubmitForm => Some(DispatchOutcome::Submitted(self.submit().await)),
        }
    }
}

/// Holds the submit control disabled while a booking is in flight.
struct SubmitGuard<'a, V: BookingView> {
    view: &'a mut V,
    state: &'a mut SubmissionState,
}

impl<'a, V: BookingView> SubmitGuard<'a, V> {
    fn engage(view: &'a mut V, state: &'a mut SubmissionState) -> Self {
        *state = SubmissionState::Submitting;
        view.set_submit_control(false, SUBMITTING_LABEL);
        Self { view, state }
    }

    fn complete(&mut self) {
        *self.state = SubmissionState::Completed;
    }
}

impl<V: BookingView> Deref for SubmitGuard<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: BookingView> DerefMut for SubmitGuard<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: BookingView> Drop for SubmitGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_submit_control(true, SUBMIT_LABEL);
        if *self.state == SubmissionState::Submitting {
            *self.state = SubmissionState::Idle;
        }
    }
}
