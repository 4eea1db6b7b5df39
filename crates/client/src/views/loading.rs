//! Loading screen: a chequerboard with a white rook sliding across it.

use super::board::{Board, Piece, SQUARE_SIZE};
use super::{Text, View};

/// The transient visual shown while the session establishes connectivity.
pub fn loading_view() -> View {
    View::Stack(vec![
        View::Board(Board::chequered().with_overlay(Piece::WhiteRook)),
        View::Progress(Some(Text::title("Loading..."))),
    ])
}

/// Horizontal offset of the animated rook after `elapsed` seconds.
///
/// The rook sweeps one square width to either side of center.
pub fn rook_offset(elapsed: f64) -> f64 {
    elapsed.sin() * f64::from(SQUARE_SIZE)
}
