// src/errors.rs

use thiserror::Error;

/// Errors produced anywhere in the chat client.
///
/// Only `ServiceUnavailable` ever reaches the conversation, and then only as
/// the fixed apology message; the other variants are startup failures.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Chat service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger setup failed: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

pub type ChatResult<T> = Result<T, ChatError>;

impl ChatError {
    pub fn service_unavailable(msg: impl Into<String>) -> Self {
        ChatError::ServiceUnavailable(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }
}
