//! Custom tag registry.
//!
//! Server markup may name custom tags that this client renders natively.
//! The tag set is closed at build time, so resolution is an exhaustive
//! match over an enum rather than open-ended reflection; markup naming a
//! tag outside the set fails with [`Error::UnknownTag`] instead of
//! crashing the render.

use std::collections::HashMap;
use std::str::FromStr;

use url::Url;

use crate::context::LiveContext;
use crate::deeplink::DeepLinkDispatcher;
use crate::error::{Error, Result};
use crate::views::View;

/// Custom markup tags this client renders natively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagName {
    /// Invisible view that joins a game when a deep link arrives.
    OpenGameListener,
}

impl TagName {
    /// The markup name this tag is registered under.
    pub fn as_str(self) -> &'static str {
        match self {
            TagName::OpenGameListener => "OpenGameListener",
        }
    }
}

impl FromStr for TagName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "OpenGameListener" => Ok(TagName::OpenGameListener),
            other => Err(Error::UnknownTag(other.to_string())),
        }
    }
}

/// A markup element being resolved: tag name plus string attributes.
#[derive(Debug, Clone, Default)]
pub struct Element {
    /// Tag name as written in the markup.
    pub name: String,
    /// Attributes from the markup.
    pub attributes: HashMap<String, String>,
}

impl Element {
    /// An element with the given tag name and no attributes.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
        }
    }
}

/// A resolved custom tag instance.
#[derive(Debug)]
pub enum NativeTag {
    OpenGameListener(OpenGameListener),
}

impl NativeTag {
    /// The view this tag contributes to the tree.
    pub fn body(&self) -> View {
        match self {
            NativeTag::OpenGameListener(listener) => listener.body(),
        }
    }
}

/// The open-game listener: renders nothing and waits for URL activations.
#[derive(Debug)]
pub struct OpenGameListener {
    dispatcher: DeepLinkDispatcher,
}

impl OpenGameListener {
    fn new(context: &LiveContext) -> Self {
        Self {
            dispatcher: DeepLinkDispatcher::from_context(context),
        }
    }

    /// Listener tags are invisible in the tree.
    pub fn body(&self) -> View {
        View::Empty
    }

    /// Forwards a URL activation to the dispatcher.
    pub fn on_open_url(&self, url: &Url) {
        self.dispatcher.handle_open_url(url);
    }
}

/// Resolves a known tag to its native implementation.
pub fn resolve(tag: TagName, _element: &Element, context: &LiveContext) -> NativeTag {
    match tag {
        TagName::OpenGameListener => NativeTag::OpenGameListener(OpenGameListener::new(context)),
    }
}

/// Resolves a tag by markup name, as the framework sees it.
///
/// # Errors
///
/// Returns [`Error::UnknownTag`] if the element's name is not in the
/// build-time tag set.
pub fn lookup(element: &Element, context: &LiveContext) -> Result<NativeTag> {
    let tag = element.name.parse::<TagName>()?;
    tracing::debug!(tag = tag.as_str(), "resolved custom tag");
    Ok(resolve(tag, element, context))
}
