// src/common/config.rs
//! Runtime configuration loaded from the environment (and `.env`)
//! with command line overrides for dry-run mode

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::common::safe_token_log;
use crate::services::telegram::DEFAULT_API_URL;
use crate::services::TelegramConfig;

const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub dry_run: bool,
    /// Absent only in dry-run mode.
    pub telegram: Option<TelegramConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok(), parse_dry_run_args())
    }

    /// Build the configuration from an arbitrary variable source.
    /// `dry_run_override` wins over `BOOKING_DRY_RUN` when set.
    pub fn from_vars<F>(lookup: F, dry_run_override: Option<bool>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let dry_run = match dry_run_override {
            Some(value) => value,
            None => parse_bool(&lookup, "BOOKING_DRY_RUN")?.unwrap_or(false),
        };

        let token = non_empty(&lookup, "TELEGRAM_BOT_TOKEN");
        let chat_id = non_empty(&lookup, "TELEGRAM_CHAT_ID");

        let telegram = match (token, chat_id) {
            (Some(bot_token), Some(chat_id)) => {
                let api_url = non_empty(&lookup, "TELEGRAM_API_URL")
                    .unwrap_or_else(|| DEFAULT_API_URL.to_string());
                let timeout_secs = match non_empty(&lookup, "TELEGRAM_TIMEOUT_SECS") {
                    Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                        name: "TELEGRAM_TIMEOUT_SECS",
                        value: raw.clone(),
                    })?,
                    None => DEFAULT_TIMEOUT_SECS,
                };

                Some(TelegramConfig {
                    bot_token,
                    chat_id,
                    api_url,
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            _ if dry_run => None,
            (None, _) => return Err(ConfigError::Missing("TELEGRAM_BOT_TOKEN")),
            (_, None) => return Err(ConfigError::Missing("TELEGRAM_CHAT_ID")),
        };

        Ok(Self { dry_run, telegram })
    }
}

fn non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bool<F>(lookup: &F, name: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, name) {
        None => Ok(None),
        Some(raw) => match raw.to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(Some(true)),
            "false" | "0" | "no" => Ok(Some(false)),
            _ => Err(ConfigError::Invalid { name, value: raw }),
        },
    }
}

/// CLI argument parsing for dry-run mode
pub fn parse_dry_run_args() -> Option<bool> {
    parse_dry_run_flags(env::args().skip(1))
}

fn parse_dry_run_flags<I>(args: I) -> Option<bool>
where
    I: IntoIterator<Item = String>,
{
    let mut result = None;
    for arg in args {
        match arg.as_str() {
            "--dry-run" | "--preview" => result = Some(true),
            "--send" => result = Some(false),
            _ => {}
        }
    }
    result
}

/// Print the delivery mode on startup
pub fn print_startup_status(config: &AppConfig) {
    if config.dry_run {
        println!("🧪 DRY RUN: заявки не отправляются, сообщение выводится на экран");
        println!();
    } else if let Some(telegram) = &config.telegram {
        println!(
            "📨 Заявки отправляются в Telegram (бот {}, чат {})",
            safe_token_log(&telegram.bot_token),
            telegram.chat_id
        );
        println!();
    }
}
