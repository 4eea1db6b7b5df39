//! Error types for the client shell.

use thiserror::Error;

/// Result type alias for client shell operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors originating in the client shell.
#[derive(Debug, Error)]
pub enum Error {
    /// Markup named a custom tag outside the build-time tag set.
    #[error("unknown custom tag: {0}")]
    UnknownTag(String),

    /// The session framework failed to deliver an action event.
    ///
    /// Constructed by [`SessionHandle`](crate::session::SessionHandle)
    /// implementations; the shell itself only logs it at debug level.
    #[error("dispatch failed: {0}")]
    Dispatch(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true if this is an unknown-tag resolution failure.
    pub fn is_unknown_tag(&self) -> bool {
        matches!(self, Error::UnknownTag(_))
    }
}
