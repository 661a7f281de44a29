//! Chatview - client-side state for a real-time chat
//!
//! This library provides the state layer behind a chat window: a pure reducer
//! that folds incoming chat events into an ordered message list with per-user
//! read flags, the observer that turns "viewer has not read this yet" into read
//! requests, and the JSON boundary to the chat server.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chat;
pub mod protocol;
pub mod replay;
pub mod settings;
pub mod store;

#[cfg(test)]
mod tests;

/// Result type alias for Chatview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Chatview operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Action or request could not be decoded/encoded
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Settings could not be read or written
    #[error("Settings error: {0}")]
    Settings(String),

    /// Outgoing text was empty after trimming
    #[error("Message is empty")]
    EmptyMessage,

    /// Outgoing text exceeds the configured limit
    #[error("Message too long: {len} characters (max {max})")]
    MessageTooLong {
        /// Length of the rejected text in characters
        len: usize,
        /// Configured maximum
        max: usize,
    },

    /// No viewer profile is configured
    #[error("Not signed in")]
    NotSignedIn,

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize logging for Chatview
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn init(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    // A subscriber may already be installed (tests, embedding apps)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
