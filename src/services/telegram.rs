// src/services/telegram.rs
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::booking::message::compose_booking_message;
use crate::booking::models::BookingRequest;
use crate::common::safe_token_log;
use crate::services::{MessageRelay, TransportError};

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_url: String,
    pub timeout: Duration,
}

#[derive(Debug, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

#[derive(Debug)]
pub struct TelegramService {
    config: TelegramConfig,
    client: Client,
}

impl TelegramService {
    pub fn new(config: TelegramConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::RequestFailed(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_url.trim_end_matches('/'),
            self.config.bot_token
        )
    }

    /// POST `text` to the configured chat. 2xx with a JSON body is success.
    pub async fn send_message(&self, text: &str) -> Result<(), TransportError> {
        let body = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text,
            parse_mode: "Markdown",
        };

        debug!(
            bot = %safe_token_log(&self.config.bot_token),
            chat_id = %self.config.chat_id,
            chars = text.chars().count(),
            "Sending Telegram message"
        );

        let response = self
            .client
            .post(self.send_message_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let e = TransportError::from(e);
                error!(error = %e, "Telegram request failed");
                e
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(status = %status, error = %error_text, "Telegram API request failed");
            return Err(TransportError::Rejected {
                status: status.as_u16(),
                body: error_text,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| TransportError::InvalidResponse(e.without_url().to_string()))?;

        info!(chat_id = %self.config.chat_id, "Telegram message delivered");
        Ok(())
    }
}

#[async_trait]
impl MessageRelay for TelegramService {
    async fn deliver(&self, request: &BookingRequest) -> Result<(), TransportError> {
        let text = compose_booking_message(request);
        self.send_message(&text).await
    }
}
