//! Error types for the Telegram client.

use thiserror::Error;

/// Result type for Telegram client operations.
pub type Result<T> = std::result::Result<T, TelegramError>;

/// Telegram client errors.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Transport failure (connection refused, timeout, TLS)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the Bot API
    #[error("Telegram API error ({status}): {message}")]
    Api { status: u16, message: String },
}
