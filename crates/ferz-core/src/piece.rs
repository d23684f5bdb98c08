//! A colored piece standing on a square.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A piece on the board.
///
/// Kind and color never change. The square is kept in step with the
/// board by [`Board::place`](crate::Board::place) and
/// [`Board::relocate`](crate::Board::relocate); nothing else writes it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    square: Square,
}

impl Piece {
    /// Create a piece standing on `square`.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Piece {
        Piece {
            kind,
            color,
            square,
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the square this piece currently stands on.
    #[inline]
    pub const fn square(self) -> Square {
        self.square
    }

    #[inline]
    pub(crate) fn set_square(&mut self, square: Square) {
        self.square = square;
    }

    /// Return the board symbol: uppercase for White, lowercase for Black.
    #[inline]
    pub fn symbol(self) -> char {
        let base = self.kind.symbol();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(
            f,
            "{}{}@{}",
            color_prefix,
            self.kind.symbol().to_ascii_uppercase(),
            self.square
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn accessors() {
        let piece = Piece::new(PieceKind::Knight, Color::Black, Square::G8);
        assert_eq!(piece.kind(), PieceKind::Knight);
        assert_eq!(piece.color(), Color::Black);
        assert_eq!(piece.square(), Square::G8);
    }

    #[test]
    fn symbol_case_follows_color() {
        for kind in PieceKind::ALL {
            let white = Piece::new(kind, Color::White, Square::A1);
            let black = Piece::new(kind, Color::Black, Square::A1);
            assert!(white.symbol().is_ascii_uppercase());
            assert!(black.symbol().is_ascii_lowercase());
            assert_eq!(white.symbol().to_ascii_lowercase(), black.symbol());
        }
    }

    #[test]
    fn display_format() {
        assert_eq!(
            format!("{}", Piece::new(PieceKind::King, Color::White, Square::E1)),
            "K"
        );
        assert_eq!(
            format!("{}", Piece::new(PieceKind::Queen, Color::Black, Square::D8)),
            "q"
        );
    }

    #[test]
    fn debug_format() {
        let piece = Piece::new(PieceKind::Pawn, Color::White, Square::E2);
        assert_eq!(format!("{piece:?}"), "WP@e2");
        let piece = Piece::new(PieceKind::Knight, Color::Black, Square::B8);
        assert_eq!(format!("{piece:?}"), "BN@b8");
    }
}
