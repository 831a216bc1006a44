// src/services/mod.rs
//
// Outbound integrations that deliver bookings

pub mod preview;
pub mod relay;
pub mod telegram;

// Re-export commonly used types for convenience
pub use preview::PreviewRelay;
pub use relay::{MessageRelay, TransportError};
pub use telegram::{TelegramConfig, TelegramService};
