//! Session lifecycle supervision.
//!
//! Maps framework-reported session states to the native visuals shown while
//! the server-rendered tree is unavailable. Retry and backoff policy stay
//! with the framework; this component only renders what it observes, and
//! records which phase it last saw.

use url::Url;

use crate::session::{SessionError, SessionState};
use crate::views::{self, View};

/// Phase of the supervised session as last observed.
///
/// `Failed` and `Fatal` are terminal from this component's perspective;
/// recovery, if any, arrives as a fresh `Connecting` observation from the
/// framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No state observed yet.
    Idle,
    /// Establishment attempt in flight.
    Connecting,
    /// Live session; server tree showing.
    Connected,
    /// Establishment failed.
    Failed,
    /// Live session dropped; awaiting the framework's reconnect.
    Disconnected,
    /// Post-connection error.
    Fatal,
}

/// Supervises one remote session and presents the correct view per state.
#[derive(Debug)]
pub struct LifecycleClient {
    phase: Phase,
}

impl LifecycleClient {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Phase last observed.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Transient loading visual.
    ///
    /// Invoked whenever the session is attempting to reach `target`, the
    /// first attempt and every reconnect alike. No side effects beyond
    /// phase tracking.
    pub fn on_loading(&mut self, target: &Url) -> View {
        tracing::debug!(%target, "session connecting");
        self.phase = Phase::Connecting;
        views::loading_view()
    }

    /// Persistent connection-error visual.
    ///
    /// Invoked when a connectivity attempt terminates without establishing
    /// a session. The visual carries the error context; formatting is
    /// presentation's job.
    pub fn on_connection_failed(&mut self, error: &SessionError) -> View {
        tracing::debug!(%error, "session establishment failed");
        self.phase = Phase::Failed;
        views::connection_error_view(error)
    }

    /// Generic fallback visual for errors outside the establishment phase.
    ///
    /// Distinct from [`on_connection_failed`](Self::on_connection_failed):
    /// these occur post-connection and have no retry target.
    pub fn on_unrecoverable_error(&mut self, error: &SessionError) -> View {
        tracing::debug!(%error, "unrecoverable session error");
        self.phase = Phase::Fatal;
        views::fallback_view()
    }

    /// State-driven entry point for frameworks that report one combined
    /// connectivity state.
    ///
    /// Returns the native view for a non-ready state, or `None` once the
    /// server-rendered tree should take over.
    pub fn view_for_state(&mut self, target: &Url, state: &SessionState) -> Option<View> {
        match state {
            SessionState::Connecting => Some(self.on_loading(target)),
            SessionState::ConnectionFailed(error) => Some(self.on_connection_failed(error)),
            SessionState::Connected => {
                self.phase = Phase::Connected;
                None
            }
            SessionState::Disconnected => {
                tracing::debug!(%target, "session dropped, framework owns the retry");
                self.phase = Phase::Disconnected;
                None
            }
        }
    }
}

impl Default for LifecycleClient {
    fn default() -> Self {
        Self::new()
    }
}
