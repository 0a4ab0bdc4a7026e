//! Client error handling.
//!
//! Transport failures end a session. Each one is reported to the handler
//! through `on_error` before [`Irc::run`](crate::client::Irc::run) returns it.

use thiserror::Error;
use tokio_tungstenite::tungstenite;
use wirc_proto::ProtocolError;

use crate::config::ConfigError;

/// Errors that end a client session.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid server url {0:?}: expected ws://, wss://, irc:// or tcp://")]
    InvalidUrl(String),

    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("connection closed by peer")]
    Closed,
}

impl ClientError {
    /// Get a static error code string for log fields.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::InvalidUrl(_) => "invalid_url",
            Self::WebSocket(_) => "websocket",
            Self::Io(_) => "io",
            Self::Protocol(_) => "protocol",
            Self::Closed => "closed",
        }
    }
}
