// src/booking/events.rs
//! Event-handler registration table for the booking form

use std::fmt;

use super::models::BookingField;

/// Element id of the form container.
pub const FORM_ID: &str = "booking-form";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The value of an input changed.
    Input,
    Submit,
}

impl FormEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FormEvent::Input => "input",
            FormEvent::Submit => "submit",
        }
    }
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerAction {
    ValidateField(BookingField),
    SubmitForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventBinding {
    pub event: FormEvent,
    pub target_id: &'static str,
    pub action: HandlerAction,
}

/// Every handler the booking form registers.
pub fn bindings() -> Vec<EventBinding> {
    let mut table: Vec<EventBinding> = BookingField::VALIDATED
        .into_iter()
        .map(|field| EventBinding {
            event: FormEvent::Input,
            target_id: field.id(),
            action: HandlerAction::ValidateField(field),
        })
        .collect();

    table.push(EventBinding {
        event: FormEvent::Submit,
        target_id: FORM_ID,
        action: HandlerAction::SubmitForm,
    });

    table
}

pub fn find_binding<'a>(
    table: &'a [EventBinding],
    event: FormEvent,
    target_id: &str,
) -> Option<&'a EventBinding> {
    table
        .iter()
        .find(|b| b.event == event && b.target_id == target_id)
}
