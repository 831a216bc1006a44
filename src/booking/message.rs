// src/booking/message.rs
//! Composes the booking notification sent to the studio chat

use super::models::{service_label, BookingRequest};

const TITLE: &str = "📋 *Новая заявка на запись*";

/// Renders `request` as a Markdown message.
///
/// Optional fields are left out when blank, and empty lines are dropped
/// before joining, so the blank separator after the title never survives.
pub fn compose_booking_message(request: &BookingRequest) -> String {
    let lines = [
        TITLE.to_string(),
        String::new(),
        format!("👤 *Имя:* {}", request.name),
        format!("📞 *Телефон:* {}", request.phone),
        optional_line("📧 *Email:*", &request.email),
        format!("🔧 *Услуга:* {}", service_label(&request.service)),
        optional_line("📅 *Дата:*", &request.date),
        optional_line("💬 *Комментарий:*", &request.message),
    ];

    lines
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn optional_line(prefix: &str, value: &str) -> String {
    if value.trim().is_empty() {
        String::new()
    } else {
        format!("{} {}", prefix, value)
    }
}
