// src/services/relay.rs
use async_trait::async_trait;
use thiserror::Error;

use crate::booking::models::BookingRequest;

/// Delivery failures. Users only ever see one generic notice for all of
/// these; the variants exist for logs.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Relay rejected the message: HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

// The request URL carries the bot token, so it never reaches the message.
impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else {
            TransportError::RequestFailed(e.without_url().to_string())
        }
    }
}

/// Something that can carry a validated booking to the studio.
#[async_trait]
pub trait MessageRelay: Send + Sync {
    async fn deliver(&self, request: &BookingRequest) -> Result<(), TransportError>;
}
