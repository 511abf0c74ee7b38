//! Error taxonomy for the chat client.
//!
//! None of these are surfaced as dialogs. Bootstrap and transport failures
//! end up in the browser console; a failed user-list lookup is rendered as a
//! system line by the caller.

/// Errors produced while deriving endpoints, loading configuration, or
/// talking to the server.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The page address could not be parsed as a URL.
    #[error("invalid page address: {0}")]
    PageAddress(#[from] url::ParseError),
    /// The page address has no host component (e.g. `file:` or `data:` URLs).
    #[error("page address has no host")]
    MissingHost,
    /// A configured route is not a bare absolute path.
    #[error("route must be an absolute path without query or fragment: {0:?}")]
    InvalidRoute(String),
    /// The `chat-config` meta tag held malformed JSON.
    #[error("invalid chat config: {0}")]
    Config(#[from] serde_json::Error),
    /// A browser API needed at bootstrap (`window`, `location`) is missing.
    #[error("browser API unavailable: {0}")]
    Browser(String),
    /// Bootstrap could not derive the user-list address.
    #[error("no user list endpoint")]
    NoEndpoint,
    /// The WebSocket could not be constructed.
    #[error("connection failed: {0}")]
    Connect(String),
    /// The HTTP request failed before a response arrived.
    #[error("request failed: {0}")]
    Request(String),
    /// The server answered with a non-success status code.
    #[error("server returned status {0}")]
    Status(u16),
}
