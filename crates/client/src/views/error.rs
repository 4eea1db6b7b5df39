//! Connection-error screen ("Checkmate") and the bare post-connection
//! fallback.

use crate::session::SessionError;

use super::board::{Board, Piece, SquareContent};
use super::{Text, View};

/// Icon drawn on the error board, named in the host platform's symbol
/// catalog.
pub const NO_CONNECTION_ICON: &str = "wifi.exclamationmark";

const ERROR_MESSAGE: &str =
    "An error occurred while loading the app.\nPlease check your internet connection.";

/// The persistent visual shown when session establishment fails.
///
/// Carries the error as detail text; whether and how the host surfaces it
/// is presentation's call.
pub fn connection_error_view(error: &SessionError) -> View {
    let board = Board::chequered()
        .with(0, 1, SquareContent::Icon(NO_CONNECTION_ICON))
        .with(1, 1, SquareContent::Piece(Piece::BlackQueen))
        .with(2, 0, SquareContent::Piece(Piece::BlackKing));

    View::Stack(vec![
        View::Board(board),
        View::Text(Text::title("Checkmate")),
        View::Text(Text::secondary(ERROR_MESSAGE)),
        View::Text(Text::detail(error.to_string())),
    ])
}

/// Generic fallback for errors after the session was established.
pub fn fallback_view() -> View {
    View::Progress(None)
}
