// src/services/preview.rs
//! Dry-run relay: prints the message instead of sending it

use async_trait::async_trait;
use tracing::info;

use crate::booking::message::compose_booking_message;
use crate::booking::models::BookingRequest;
use crate::common::safe_phone_log;
use crate::services::{MessageRelay, TransportError};

#[derive(Debug, Default)]
pub struct PreviewRelay;

#[async_trait]
impl MessageRelay for PreviewRelay {
    async fn deliver(&self, request: &BookingRequest) -> Result<(), TransportError> {
        let text = compose_booking_message(request);
        info!(phone = %safe_phone_log(&request.phone), "Dry run, booking not sent");

        println!("──── предпросмотр сообщения ────");
        println!("{}", text);
        println!("────────────────────────────────");
        Ok(())
    }
}
