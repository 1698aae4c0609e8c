//! Shared error type across lively crates.

use thiserror::Error;

/// Stable error codes surfaced to callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration rejected.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Transport could not establish a connection.
    ConnectFailed,
    /// `connect` called on a connected client.
    AlreadyConnected,
    /// `send` called on a disconnected client.
    NotConnected,
    /// Transport rejected an emit.
    SendFailed,
    /// Transport failed to tear down.
    DisconnectFailed,
    /// Payload could not be encoded.
    EncodeFailed,
    /// Anything else.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and test vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::ConnectFailed => "CONNECT_FAILED",
            ErrorCode::AlreadyConnected => "ALREADY_CONNECTED",
            ErrorCode::NotConnected => "NOT_CONNECTED",
            ErrorCode::SendFailed => "SEND_FAILED",
            ErrorCode::DisconnectFailed => "DISCONNECT_FAILED",
            ErrorCode::EncodeFailed => "ENCODE_FAILED",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, LivelyError>;

/// Unified error type used by core and client.
#[derive(Debug, Error)]
pub enum LivelyError {
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("connect failed: {0}")]
    Connect(String),
    #[error("already connected")]
    AlreadyConnected,
    #[error("not connected")]
    NotConnected,
    #[error("send failed: {0}")]
    Send(String),
    #[error("disconnect failed: {0}")]
    Disconnect(String),
    #[error("encode failed: {0}")]
    Encode(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl LivelyError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            LivelyError::BadConfig(_) => ErrorCode::BadConfig,
            LivelyError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            LivelyError::Connect(_) => ErrorCode::ConnectFailed,
            LivelyError::AlreadyConnected => ErrorCode::AlreadyConnected,
            LivelyError::NotConnected => ErrorCode::NotConnected,
            LivelyError::Send(_) => ErrorCode::SendFailed,
            LivelyError::Disconnect(_) => ErrorCode::DisconnectFailed,
            LivelyError::Encode(_) => ErrorCode::EncodeFailed,
            LivelyError::Internal(_) => ErrorCode::Internal,
        }
    }
}
