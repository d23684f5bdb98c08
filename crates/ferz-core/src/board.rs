//! The board: an 8x8 occupancy grid that owns every piece by position.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank order from the a-file to the h-file, identical for both colors.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement for a two-player session.
///
/// Invariants:
/// - at most one piece per square;
/// - every occupied square holds a piece whose [`Piece::square`] is that square.
///
/// The grid only changes through [`Board::place`] and [`Board::relocate`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Occupant of each square, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard opening position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.init();
        board
    }

    /// Clear the board and set up the standard opening position.
    ///
    /// # Panics
    ///
    /// Only if the fixed opening coordinates were wrong, which is a bug in
    /// this function rather than a condition a caller can trigger.
    pub fn init(&mut self) {
        *self = Board::empty();
        for (color, back_rank, pawn_rank) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
            for (file, kind) in (0..).zip(BACK_RANK) {
                let back = Square::from_indices(back_rank, file)
                    .expect("opening back rank lies on the board");
                let pawn = Square::from_indices(pawn_rank, file)
                    .expect("opening pawn rank lies on the board");
                self.place(back, Some(Piece::new(kind, color, back)));
                self.place(pawn, Some(Piece::new(PieceKind::Pawn, color, pawn)));
            }
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Write a square unconditionally, bypassing every rule.
    ///
    /// A placed piece is re-stamped with `sq` so the grid and the piece agree
    /// on where it stands. Used for setup and for loading saved games.
    pub fn place(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece.map(|mut p| {
            p.set_square(sq);
            p
        });
    }

    /// Move whatever stands on `from` to `to`, discarding the previous
    /// occupant of `to`. Legality is the caller's responsibility.
    ///
    /// Returns the discarded occupant, if there was one. Does nothing when
    /// `from` is empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.squares[from.index()].take()?;
        piece.set_square(to);
        self.squares[to.index()].replace(piece)
    }

    /// Iterate over all pieces in square order (a1, b1, ..., h8).
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().filter_map(|sq| *sq)
    }

    /// Return `true` if `from` and `to` share a rank and nothing stands
    /// strictly between them.
    pub fn clear_horizontal(&self, from: Square, to: Square) -> bool {
        from.rank() == to.rank() && self.between_is_empty(from, to)
    }

    /// Return `true` if `from` and `to` share a file and nothing stands
    /// strictly between them.
    pub fn clear_vertical(&self, from: Square, to: Square) -> bool {
        from.file() == to.file() && self.between_is_empty(from, to)
    }

    /// Return `true` if `from` and `to` share a diagonal (either sense) and
    /// nothing stands strictly between them.
    pub fn clear_diagonal(&self, from: Square, to: Square) -> bool {
        let (d_rank, d_file) = displacement(from, to);
        d_rank.abs() == d_file.abs() && self.between_is_empty(from, to)
    }

    /// Walk from `from` toward `to` one step at a time. Callers check that
    /// the two squares are aligned, so the walk lands exactly on `to`; a zero
    /// step lands on it immediately.
    fn between_is_empty(&self, from: Square, to: Square) -> bool {
        let (d_rank, d_file) = displacement(from, to);
        let step = (d_rank.signum(), d_file.signum());

        let mut current = from;
        while let Some(next) = current.offset(step.0, step.1) {
            if next == to {
                return true;
            }
            if self.is_occupied(next) {
                return false;
            }
            current = next;
        }
        // Walked off the board without meeting `to`: not aligned.
        false
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

/// Signed (rank, file) displacement from `from` to `to`.
#[inline]
pub(crate) fn displacement(from: Square, to: Square) -> (i8, i8) {
    (
        to.rank().index() as i8 - from.rank().index() as i8,
        to.file().index() as i8 - from.file().index() as i8,
    )
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board(")?;
        writeln!(f, "{}", self.pretty())?;
        write!(f, ")")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank_idx in (0..8).rev() {
            write!(f, "{}  ", rank_idx + 1)?;
            for file_idx in 0..8 {
                let c = Square::from_indices(rank_idx, file_idx)
                    .ok()
                    .and_then(|sq| board.piece_at(sq))
                    .map_or('.', Piece::symbol);
                if file_idx < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
