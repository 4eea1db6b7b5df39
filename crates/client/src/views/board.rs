//! The 3x3 chequerboard tile shared by the loading and error screens.

/// Square edge length in points.
pub const SQUARE_SIZE: f32 = 75.0;

/// Light square fill.
pub const EVEN_BACKGROUND: Color = Color {
    red: 1.0,
    green: 0.8,
    blue: 0.62,
};

/// Dark square fill.
pub const ODD_BACKGROUND: Color = Color {
    red: 0.82,
    green: 0.54,
    blue: 0.28,
};

/// RGB fill color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

/// Chess piece glyphs the screens draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    BlackQueen,
    BlackKing,
    WhiteRook,
}

impl Piece {
    /// Unicode symbol for the piece.
    pub fn symbol(self) -> char {
        match self {
            Piece::BlackQueen => '\u{265B}', // ♛
            Piece::BlackKing => '\u{265A}',  // ♚
            Piece::WhiteRook => '\u{265C}',  // ♜
        }
    }
}

/// Content drawn over a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareContent {
    /// Bare square.
    Empty,
    /// A piece glyph.
    Piece(Piece),
    /// A platform icon, named by the host platform's symbol catalog.
    Icon(&'static str),
}

/// One board square: fill plus content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub fill: Color,
    pub content: SquareContent,
}

/// A 3x3 grid of squares, row-major, with an optional animated overlay
/// piece (see [`rook_offset`](super::loading::rook_offset) for its motion).
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub squares: [[Square; 3]; 3],
    pub overlay: Option<Piece>,
}

impl Board {
    /// Plain alternating board: light fill where row + column is even.
    pub fn chequered() -> Self {
        let squares = std::array::from_fn(|row| {
            std::array::from_fn(|col| Square {
                fill: if (row + col) % 2 == 0 {
                    EVEN_BACKGROUND
                } else {
                    ODD_BACKGROUND
                },
                content: SquareContent::Empty,
            })
        });
        Self {
            squares,
            overlay: None,
        }
    }

    /// Places content on the square at `row`, `col`.
    pub fn with(mut self, row: usize, col: usize, content: SquareContent) -> Self {
        self.squares[row][col].content = content;
        self
    }

    /// Sets the animated overlay piece.
    pub fn with_overlay(mut self, piece: Piece) -> Self {
        self.overlay = Some(piece);
        self
    }
}
