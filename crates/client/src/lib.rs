//! chessview: native client shell for a server-rendered chess app.
//!
//! The application's logic and UI tree live on a remote server and are
//! streamed to the client by an external session framework. This crate is
//! the thin native side of that arrangement:
//!
//! - **Lifecycle supervision**: maps session connectivity states to the
//!   native visuals shown while the server-rendered tree is unavailable.
//! - **Deep-link dispatch**: turns `chessapp://<game>` activations into a
//!   single asynchronous join action against the live session.
//! - **Tag registry**: resolves the closed set of custom markup tags to
//!   native views.
//! - **Views**: declarative descriptions of the loading and error screens.
//!
//! The session framework is consumed through the [`SessionHandle`] seam and
//! the already-classified [`SessionState`]/[`SessionError`] values it hands
//! to the lifecycle callbacks. No network protocol is implemented here;
//! connection, retry, and the streamed view tree all belong to the
//! framework.

pub mod client;
pub mod context;
pub mod deeplink;
pub mod error;
pub mod lifecycle;
pub mod registry;
pub mod session;
pub mod views;

// Re-export key types at crate root
pub use client::{ChessClient, ClientConfig, DEFAULT_SERVER_URL};
pub use context::LiveContext;
pub use deeplink::DeepLinkDispatcher;
pub use error::{Error, Result};
pub use lifecycle::{LifecycleClient, Phase};
pub use registry::{Element, NativeTag, OpenGameListener, TagName};
pub use session::{EventChannel, PushFuture, SessionError, SessionHandle, SessionState};
pub use views::View;
