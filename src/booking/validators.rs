// src/booking/validators.rs

use lazy_static::lazy_static;
use regex::Regex;

use super::models::{BookingField, FormInput};
use crate::common::{FieldError, ValidationResult, Validator};

lazy_static! {
    static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9]{10,15}$").unwrap();
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

const NAME_MIN_CHARS: usize = 2;

// ============================================================================
// Field Validators
// ============================================================================

pub fn validate_name(value: &str) -> Result<(), FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::EmptyName);
    }
    if trimmed.chars().count() < NAME_MIN_CHARS {
        return Err(FieldError::NameTooShort);
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::EmptyPhone);
    }
    if !PHONE_REGEX.is_match(&strip_phone_punctuation(value)) {
        return Err(FieldError::InvalidPhoneFormat);
    }
    Ok(())
}

/// Email is optional; only a non-blank value is checked.
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    if !EMAIL_REGEX.is_match(value) {
        return Err(FieldError::InvalidEmailFormat);
    }
    Ok(())
}

pub fn validate_service(value: &str) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::ServiceNotSelected);
    }
    Ok(())
}

/// Runs the rule bound to `field`. Fields without rules always pass.
pub fn validate_field(field: BookingField, value: &str) -> Result<(), FieldError> {
    match field {
        BookingField::Name => validate_name(value),
        BookingField::Phone => validate_phone(value),
        BookingField::Email => validate_email(value),
        BookingField::Service => validate_service(value),
        BookingField::Date | BookingField::Message => Ok(()),
    }
}

/// Drops whitespace, hyphens and parentheses from a phone number.
pub fn strip_phone_punctuation(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

// ============================================================================
// Form Validator
// ============================================================================

pub struct FormValidator;

impl Validator<FormInput> for FormValidator {
    fn validate(&self, data: &FormInput) -> ValidationResult {
        let mut result = ValidationResult::new();

        for field in BookingField::VALIDATED {
            result.record(field, validate_field(field, data.get(field)));
        }

        result
    }
}

/// Validates every field of `input` without touching any UI.
pub fn validate_form(input: &FormInput) -> ValidationResult {
    FormValidator.validate(input)
}
