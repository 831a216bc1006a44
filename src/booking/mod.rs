// src/booking/mod.rs

pub mod controller;
pub mod events;
pub mod message;
pub mod models;
pub mod validators;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use controller::{BookingForm, DispatchOutcome};
pub use events::{FormEvent, FORM_ID};
pub use models::*;
pub use view::BookingView;
