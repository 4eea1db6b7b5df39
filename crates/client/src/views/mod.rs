//! Declarative descriptions of the shell's custom native visuals.
//!
//! Nothing here renders; these are pure data consumed by the host
//! platform's drawing layer. The shell shows exactly three custom screens:
//! the animated loading board, the connection-error board, and a bare
//! progress fallback. Everything else on screen is server-rendered and out
//! of this crate's hands.

pub mod board;
pub mod error;
pub mod loading;

pub use board::{Board, Color, Piece, Square, SquareContent, EVEN_BACKGROUND, ODD_BACKGROUND};
pub use error::{connection_error_view, fallback_view};
pub use loading::{loading_view, rook_offset};

/// A renderable native view description.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Renders nothing; used by listener tags that only observe events.
    Empty,
    /// Vertical stack of child views.
    Stack(Vec<View>),
    /// Styled text run.
    Text(Text),
    /// Chessboard tile.
    Board(Board),
    /// Indeterminate progress indicator with an optional label.
    Progress(Option<Text>),
}

/// Text run with a presentation role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// Text content; may contain newlines.
    pub content: String,
    /// Role the host styles the run by.
    pub role: TextRole,
}

/// Presentation role for a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Prominent headline.
    Title,
    /// Secondary guidance text.
    Secondary,
    /// Diagnostic detail the host may surface or hide.
    Detail,
}

impl Text {
    /// Title-role text.
    pub fn title(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: TextRole::Title,
        }
    }

    /// Secondary-role text.
    pub fn secondary(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: TextRole::Secondary,
        }
    }

    /// Detail-role text.
    pub fn detail(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: TextRole::Detail,
        }
    }
}
