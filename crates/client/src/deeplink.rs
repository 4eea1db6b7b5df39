//! Deep-link dispatch.
//!
//! Translates an OS-delivered "open URL" activation into exactly one remote
//! join action. The host component of the URL is the entire payload:
//! `chessapp://abc123` joins game `abc123`; path and query are ignored.

use std::sync::{Arc, Weak};

use chessview_protocol::ActionEvent;
use url::Url;

use crate::context::LiveContext;
use crate::session::{EventChannel, SessionHandle};

/// Listens for URL activations and fires join actions at the live session.
///
/// Holds only a non-owning session reference, so a dispatcher may outlive
/// the session it was built for; activations after teardown are quiet
/// no-ops. Clones share nothing mutable, so concurrent activations are
/// independent.
#[derive(Clone, Debug)]
pub struct DeepLinkDispatcher {
    session: Weak<dyn SessionHandle>,
}

impl DeepLinkDispatcher {
    /// Creates a dispatcher bound to the given session.
    pub fn new(session: &Arc<dyn SessionHandle>) -> Self {
        Self {
            session: Arc::downgrade(session),
        }
    }

    /// Creates a dispatcher from a tag-construction context.
    pub fn from_context(context: &LiveContext) -> Self {
        Self {
            session: context.session(),
        }
    }

    /// Handles one URL activation.
    ///
    /// Extracts the host as the game identifier and dispatches one join
    /// action, fire-and-forget: the caller never observes the result, and
    /// nothing is retried. Activations with no extractable identifier are
    /// skipped without error, so a partial deep link never produces a
    /// malformed action event.
    pub fn handle_open_url(&self, url: &Url) {
        let Some(game) = game_id(url) else {
            tracing::debug!(%url, "deep link without game identifier, skipped");
            return;
        };

        let event = ActionEvent::join(game);
        let session = self.session.clone();

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(%url, "deep link outside a runtime, dropped");
            return;
        };
        handle.spawn(async move {
            let Some(session) = session.upgrade() else {
                tracing::debug!("deep link arrived after session teardown, dropped");
                return;
            };
            if let Err(error) = EventChannel::new(session).push(event).await {
                // Fatal dispatch failures surface through the framework's
                // own error channel, not here.
                tracing::debug!(%error, "join dispatch failed");
            }
        });
    }
}

/// Extracts the game identifier from a deep-link URL, if it names one.
fn game_id(url: &Url) -> Option<&str> {
    url.host_str().filter(|host| !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_is_host_component() {
        let url = Url::parse("chessapp://game42").unwrap();
        assert_eq!(game_id(&url), Some("game42"));
    }

    #[test]
    fn test_game_id_ignores_path_and_query() {
        let url = Url::parse("chessapp://game42/ignored/path?x=1").unwrap();
        assert_eq!(game_id(&url), Some("game42"));
    }

    #[test]
    fn test_empty_host_yields_no_identifier() {
        let url = Url::parse("chessapp://").unwrap();
        assert_eq!(game_id(&url), None);
    }

    #[test]
    fn test_hostless_scheme_yields_no_identifier() {
        let url = Url::parse("mailto:someone@example.com").unwrap();
        assert_eq!(game_id(&url), None);
    }
}
