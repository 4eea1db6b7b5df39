//! Root client shell driven by the host runtime.

use std::sync::Arc;

use parking_lot::Mutex;
use url::Url;

use crate::context::LiveContext;
use crate::deeplink::DeepLinkDispatcher;
use crate::lifecycle::{LifecycleClient, Phase};
use crate::session::{SessionError, SessionHandle, SessionState};
use crate::views::View;

/// Server the shell targets when no override is configured.
pub const DEFAULT_SERVER_URL: &str = "https://chess.dockyard.com/";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server that streams the UI session.
    pub server_url: Url,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: Url::parse(DEFAULT_SERVER_URL).expect("default server URL is valid"),
        }
    }
}

/// The client shell: one supervised session, native non-ready visuals, and
/// deep-link joins.
///
/// The host runtime constructs one of these at window launch and drives it
/// through the lifecycle callbacks. The session itself is owned by the
/// external framework; the shell holds only a non-owning dispatcher built
/// when the host attaches a session.
pub struct ChessClient {
    config: ClientConfig,
    lifecycle: Mutex<LifecycleClient>,
    dispatcher: Mutex<Option<DeepLinkDispatcher>>,
}

impl ChessClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            lifecycle: Mutex::new(LifecycleClient::new()),
            dispatcher: Mutex::new(None),
        }
    }

    /// A client targeting [`DEFAULT_SERVER_URL`].
    pub fn with_default_server() -> Self {
        Self::new(ClientConfig::default())
    }

    /// Server URL this client targets.
    pub fn server_url(&self) -> &Url {
        &self.config.server_url
    }

    /// Phase the supervised session was last observed in.
    pub fn phase(&self) -> Phase {
        self.lifecycle.lock().phase()
    }

    /// Called by the host when the framework hands over a live session.
    ///
    /// Builds the deep-link dispatcher against it and returns the context
    /// that tag constructors resolve against.
    pub fn session_attached(&self, session: &Arc<dyn SessionHandle>) -> LiveContext {
        *self.dispatcher.lock() = Some(DeepLinkDispatcher::new(session));
        tracing::debug!(target = %self.config.server_url, "session attached");
        LiveContext::new(session, self.config.server_url.clone())
    }

    /// Called at session teardown; later activations become no-ops.
    pub fn session_detached(&self) {
        *self.dispatcher.lock() = None;
        tracing::debug!("session detached");
    }

    /// Lifecycle callback: the session is attempting to reach the server.
    pub fn on_loading(&self) -> View {
        self.lifecycle.lock().on_loading(&self.config.server_url)
    }

    /// Lifecycle callback: establishment failed.
    pub fn on_connection_failed(&self, error: &SessionError) -> View {
        self.lifecycle.lock().on_connection_failed(error)
    }

    /// Lifecycle callback: an error outside the establishment phase.
    pub fn on_unrecoverable_error(&self, error: &SessionError) -> View {
        self.lifecycle.lock().on_unrecoverable_error(error)
    }

    /// State-driven lifecycle entry point; see
    /// [`LifecycleClient::view_for_state`].
    pub fn view_for_state(&self, state: &SessionState) -> Option<View> {
        self.lifecycle
            .lock()
            .view_for_state(&self.config.server_url, state)
    }

    /// OS-delivered URL activation.
    ///
    /// Forwards to the deep-link dispatcher if a session is attached;
    /// otherwise the activation is dropped quietly.
    pub fn open_url(&self, url: &Url) {
        let dispatcher = self.dispatcher.lock().clone();
        match dispatcher {
            Some(dispatcher) => dispatcher.handle_open_url(url),
            None => tracing::debug!(%url, "URL activation with no live session, dropped"),
        }
    }
}
