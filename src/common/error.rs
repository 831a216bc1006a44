// Error taxonomy for booking form fields

use std::fmt;

/// Reasons a single form field can be rejected.
///
/// `Display` renders the inline message shown next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    EmptyName,
    NameTooShort,
    EmptyPhone,
    InvalidPhoneFormat,
    InvalidEmailFormat,
    ServiceNotSelected,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::EmptyName => "Введите ваше имя",
            FieldError::NameTooShort => "Имя должно содержать минимум 2 символа",
            FieldError::EmptyPhone => "Введите номер телефона",
            FieldError::InvalidPhoneFormat => "Введите корректный номер телефона",
            FieldError::InvalidEmailFormat => "Введите корректный email",
            FieldError::ServiceNotSelected => "Выберите услугу",
        }
    }

    /// Stable machine-readable code, used in log fields.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::EmptyName => "EMPTY_NAME",
            FieldError::NameTooShort => "NAME_TOO_SHORT",
            FieldError::EmptyPhone => "EMPTY_PHONE",
            FieldError::InvalidPhoneFormat => "INVALID_PHONE_FORMAT",
            FieldError::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
            FieldError::ServiceNotSelected => "SERVICE_NOT_SELECTED",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FieldError {}
