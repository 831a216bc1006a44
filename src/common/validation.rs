// Common validation types and traits

use super::error::FieldError;
use crate::booking::models::BookingField;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: BookingField,
    pub kind: FieldError,
}

impl ValidationError {
    #[allow(dead_code)]
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: BookingField, kind: FieldError) {
        self.is_valid = false;
        self.errors.push(ValidationError { field, kind });
    }

    /// Record the outcome of a single field validator.
    pub fn record(&mut self, field: BookingField, outcome: Result<(), FieldError>) {
        if let Err(kind) = outcome {
            self.add_error(field, kind);
        }
    }

    pub fn error_for(&self, field: BookingField) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn invalid_fields(&self) -> Vec<BookingField> {
        self.errors.iter().map(|e| e.field).collect()
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}
