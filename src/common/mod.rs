// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::FieldError;
pub use helpers::{safe_phone_log, safe_token_log};
pub use validation::{ValidationResult, Validator};
