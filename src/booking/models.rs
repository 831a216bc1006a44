// src/booking/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Form fields
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingField {
    Name,
    Phone,
    Email,
    Service,
    Date,
    Message,
}

impl BookingField {
    /// Display order of the form, also the order of the composed message.
    pub const ALL: [BookingField; 6] = [
        BookingField::Name,
        BookingField::Phone,
        BookingField::Email,
        BookingField::Service,
        BookingField::Date,
        BookingField::Message,
    ];

    /// Fields that carry validation rules.
    pub const VALIDATED: [BookingField; 4] = [
        BookingField::Name,
        BookingField::Phone,
        BookingField::Email,
        BookingField::Service,
    ];

    /// Element id of the input bound to this field.
    pub fn id(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Phone => "phone",
            BookingField::Email => "email",
            BookingField::Service => "service",
            BookingField::Date => "date",
            BookingField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingField::Name => "Имя",
            BookingField::Phone => "Телефон",
            BookingField::Email => "Email",
            BookingField::Service => "Услуга",
            BookingField::Date => "Дата",
            BookingField::Message => "Комментарий",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            BookingField::Name | BookingField::Phone | BookingField::Service
        )
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

// ============================================================================
// Services offered by the studio
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    Tattoo,
    Coverup,
    Correction,
    Sketch,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::Tattoo,
        ServiceKind::Coverup,
        ServiceKind::Correction,
        ServiceKind::Sketch,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            ServiceKind::Tattoo => "tattoo",
            ServiceKind::Coverup => "coverup",
            ServiceKind::Correction => "correction",
            ServiceKind::Sketch => "sketch",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.value() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Tattoo => "Татуировка",
            ServiceKind::Coverup => "Перекрытие",
            ServiceKind::Correction => "Коррекция",
            ServiceKind::Sketch => "Разработка эскиза",
        }
    }
}

/// Human label for a raw service value; unknown values pass through unchanged.
pub fn service_label(value: &str) -> &str {
    match ServiceKind::from_value(value) {
        Some(kind) => kind.label(),
        None => value,
    }
}

// ============================================================================
// Raw input and validated request
// ============================================================================

/// Current contents of the form inputs, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub message: String,
}

impl FormInput {
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Phone => &self.phone,
            BookingField::Email => &self.email,
            BookingField::Service => &self.service,
            BookingField::Date => &self.date,
            BookingField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: BookingField, value: impl Into<String>) {
        let value = value.into();
        match field {
            BookingField::Name => self.name = value,
            BookingField::Phone => self.phone = value,
            BookingField::Email => self.email = value,
            BookingField::Service => self.service = value,
            BookingField::Date => self.date = value,
            BookingField::Message => self.message = value,
        }
    }
}

/// A booking that passed validation and is ready to be sent.
///
/// Text fields are trimmed; `service` and `date` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub message: String,
}

impl BookingRequest {
    /// Callers must have validated `input` first.
    pub(crate) fn from_validated(input: &FormInput) -> Self {
        Self {
            name: input.name.trim().to_string(),
            phone: input.phone.trim().to_string(),
            email: input.email.trim().to_string(),
            service: input.service.clone(),
            date: input.date.clone(),
            message: input.message.trim().to_string(),
        }
    }
}

// ============================================================================
// Submission lifecycle
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    /// The booking was delivered and the form is hidden.
    Completed,
}

/// What a submit action ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// Validation failed; nothing was sent.
    Rejected(Vec<BookingField>),
    /// The form is not accepting submissions right now.
    Ignored,
    Sent(SubmissionOutcome),
}
