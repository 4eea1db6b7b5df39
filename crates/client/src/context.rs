//! Explicit context handed to tag constructors.

use std::sync::{Arc, Weak};

use url::Url;

use crate::session::SessionHandle;

/// Context available to native views resolved from server markup.
///
/// Passed explicitly at construction instead of being looked up from
/// ambient state, so a view's dependencies are visible at its seam and a
/// test can hand it a fake session. Holds only a non-owning session
/// reference; the host framework keeps ownership.
#[derive(Clone)]
pub struct LiveContext {
    session: Weak<dyn SessionHandle>,
    target: Url,
}

impl LiveContext {
    /// Creates a context bound to the given live session and target URL.
    pub fn new(session: &Arc<dyn SessionHandle>, target: Url) -> Self {
        Self {
            session: Arc::downgrade(session),
            target,
        }
    }

    /// Non-owning reference to the live session.
    pub fn session(&self) -> Weak<dyn SessionHandle> {
        self.session.clone()
    }

    /// The server URL this session is bound to.
    pub fn target(&self) -> &Url {
        &self.target
    }
}
