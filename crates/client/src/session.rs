//! Session seam between the client shell and the external session framework.
//!
//! The framework owns connectivity, retry policy, and the streamed view
//! tree. The shell sees it through two small surfaces: the [`SessionHandle`]
//! capability for pushing action events upstream, and the [`SessionState`] /
//! [`SessionError`] values it is handed, already classified, through the
//! lifecycle callbacks.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use chessview_protocol::ActionEvent;
use serde_json::Value;
use thiserror::Error;

use crate::error::Result;

/// Boxed future returned by [`SessionHandle::push_event`].
pub type PushFuture<'a> = Pin<Box<dyn Future<Output = Result<Value>> + Send + 'a>>;

/// Capability for sending action events to the live session.
///
/// Implemented by the external session framework; this crate only consumes
/// it. The resolved value is the server's reply payload, which the shell
/// discards.
pub trait SessionHandle: Send + Sync {
    /// Pushes one action event to the server.
    fn push_event(&self, event: ActionEvent) -> PushFuture<'_>;
}

/// Typed proxy over a session handle.
///
/// Thin convenience wrapper that drops the raw reply payload, keeping the
/// fire-and-forget contract visible at the call site.
#[derive(Clone)]
pub struct EventChannel {
    session: Arc<dyn SessionHandle>,
}

impl EventChannel {
    /// Creates a channel for the given session.
    pub fn new(session: Arc<dyn SessionHandle>) -> Self {
        Self { session }
    }

    /// Pushes an event and discards the reply payload.
    pub async fn push(&self, event: ActionEvent) -> Result<()> {
        let _ = self.session.push_event(event).await?;
        Ok(())
    }
}

/// Connectivity failure classified by the external framework.
///
/// The shell carries these for presentation; it never constructs them from
/// live failures and never branches on their contents, only on which
/// lifecycle callback delivered them.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Session establishment failed before any connection was made
    /// (DNS failure, TLS failure, timeout).
    #[error("connection failed: {0}")]
    Connect(String),

    /// The server refused the handshake with a non-2xx status.
    #[error("handshake rejected with status {0}")]
    Handshake(u16),

    /// The server broke the session protocol after connecting.
    #[error("protocol violation: {0}")]
    Protocol(String),

    /// The session was closed and will not be reestablished.
    #[error("session closed: {0}")]
    Closed(String),
}

/// Connectivity state of the remote session, as reported by the framework.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// A connectivity attempt is in flight (first connect or reconnect).
    Connecting,
    /// The session is live and the server-rendered tree is showing.
    Connected,
    /// A connectivity attempt terminated without establishing a session.
    ConnectionFailed(SessionError),
    /// A live session dropped; the framework retries on its own.
    Disconnected,
}
