// src/booking/view.rs
//! The UI surface the booking pipeline drives.

use super::models::BookingField;

/// Label of the submit control while idle.
pub const SUBMIT_LABEL: &str = "Отправить заявку";
/// Label of the submit control while a booking is in flight.
pub const SUBMITTING_LABEL: &str = "Отправка...";
/// Blocking notice shown when a booking could not be delivered.
pub const DELIVERY_FAILED_NOTICE: &str =
    "Не удалось отправить заявку. Пожалуйста, свяжитесь с нами по телефону.";

/// Page elements the form pipeline reads from and writes to.
///
/// Implementations own the actual rendering; the pipeline never keeps
/// handles to individual elements.
pub trait BookingView {
    /// Current raw value of the input bound to `field`.
    fn field_value(&self, field: BookingField) -> String;

    /// Marks `field` invalid and shows `message`, or clears both on `None`.
    fn show_field_error(&mut self, field: BookingField, message: Option<&str>);

    fn set_submit_control(&mut self, enabled: bool, label: &str);

    fn hide_form(&mut self);

    fn show_success(&mut self);

    /// Blocking notification; returns once the user has seen it.
    fn alert(&mut self, message: &str);
}
