//! Per-kind move legality.
//!
//! Every rule is a pure check over `&Board`; only [`attempt_move`] mutates,
//! and only after the check has passed, so a refused move never touches the
//! board.

mod king;
mod knight;
mod pawn;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveRejection;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// What an accepted move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The destination was empty.
    Quiet,
    /// The destination held this opposing piece, which is now gone.
    Capture(Piece),
}

impl MoveOutcome {
    /// Return the captured piece, if any.
    #[inline]
    pub fn captured(self) -> Option<Piece> {
        match self {
            MoveOutcome::Quiet => None,
            MoveOutcome::Capture(piece) => Some(piece),
        }
    }
}

/// Check whether `piece` may move to `to` without touching the board.
///
/// `piece` must be the exact piece standing on its own square.
pub fn validate_move(board: &Board, piece: Piece, to: Square) -> Result<(), MoveRejection> {
    let from = piece.square();
    match board.piece_at(from) {
        None => return Err(MoveRejection::NoPieceSelected { square: from }),
        Some(occupant) if occupant != piece => {
            return Err(MoveRejection::StalePiece { square: from });
        }
        Some(_) => {}
    }
    let color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => pawn::validate(board, color, from, to),
        PieceKind::Knight => knight::validate(board, color, from, to),
        PieceKind::Bishop => sliders::validate_bishop(board, color, from, to),
        PieceKind::Rook => sliders::validate_rook(board, color, from, to),
        PieceKind::Queen => sliders::validate_queen(board, color, from, to),
        PieceKind::King => king::validate(board, color, from, to),
    }
}

/// Move `piece` to `to` if its rule allows it.
///
/// On success the source is empty, the destination holds the piece, and any
/// captured occupant is reported in the outcome. On rejection the board is
/// unchanged.
pub fn attempt_move(
    board: &mut Board,
    piece: Piece,
    to: Square,
) -> Result<MoveOutcome, MoveRejection> {
    validate_move(board, piece, to)?;
    Ok(match board.relocate(piece.square(), to) {
        None => MoveOutcome::Quiet,
        Some(captured) => MoveOutcome::Capture(captured),
    })
}

/// The shared destination check: empty or enemy is fine, own color is not.
fn empty_or_enemy(board: &Board, color: Color, to: Square) -> Result<(), MoveRejection> {
    match board.piece_at(to) {
        Some(occupant) if occupant.color() == color => Err(MoveRejection::FriendlyFire),
        _ => Ok(()),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::board::Board;
    use crate::color::Color;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    /// Build a board holding exactly the given pieces.
    pub(crate) fn board_with(pieces: &[(Square, PieceKind, Color)]) -> Board {
        let mut board = Board::empty();
        for &(sq, kind, color) in pieces {
            board.place(sq, Some(Piece::new(kind, color, sq)));
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::testing::board_with;
    use super::{MoveOutcome, attempt_move, validate_move};
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::MoveRejection;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn quiet_move_relocates() {
        let mut board = board_with(&[(Square::D4, PieceKind::Queen, Color::White)]);
        let queen = board.piece_at(Square::D4).unwrap();
        assert_eq!(
            attempt_move(&mut board, queen, Square::D8),
            Ok(MoveOutcome::Quiet)
        );
        assert!(!board.is_occupied(Square::D4));
        assert_eq!(board.piece_at(Square::D8).unwrap().square(), Square::D8);
    }

    #[test]
    fn capture_reports_victim() {
        let mut board = board_with(&[
            (Square::D4, PieceKind::Rook, Color::White),
            (Square::D7, PieceKind::Knight, Color::Black),
        ]);
        let rook = board.piece_at(Square::D4).unwrap();
        let outcome = attempt_move(&mut board, rook, Square::D7).unwrap();
        let victim = outcome.captured().unwrap();
        assert_eq!(victim.kind(), PieceKind::Knight);
        assert_eq!(victim.color(), Color::Black);
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn rejection_leaves_board_untouched() {
        let mut board = board_with(&[
            (Square::D4, PieceKind::Bishop, Color::White),
            (Square::F6, PieceKind::Pawn, Color::White),
        ]);
        let before = board.clone();
        let bishop = board.piece_at(Square::D4).unwrap();
        assert_eq!(
            attempt_move(&mut board, bishop, Square::F6),
            Err(MoveRejection::FriendlyFire)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn validate_dispatches_by_kind() {
        let board = board_with(&[
            (Square::B1, PieceKind::Knight, Color::White),
            (Square::E1, PieceKind::King, Color::White),
        ]);
        let knight = board.piece_at(Square::B1).unwrap();
        let king = board.piece_at(Square::E1).unwrap();
        assert_eq!(validate_move(&board, knight, Square::C3), Ok(()));
        assert_eq!(
            validate_move(&board, king, Square::C3),
            Err(MoveRejection::WrongGeometry {
                kind: PieceKind::King
            })
        );
    }

    #[test]
    fn piece_must_match_its_square() {
        let mut board = Board::starting_position();
        let before = board.clone();
        let impostor = Piece::new(PieceKind::Queen, Color::White, Square::E2);
        assert_eq!(
            attempt_move(&mut board, impostor, Square::H5),
            Err(MoveRejection::StalePiece { square: Square::E2 })
        );
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black, Square::E2);
        assert_eq!(
            attempt_move(&mut board, black_pawn, Square::E1),
            Err(MoveRejection::StalePiece { square: Square::E2 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn empty_source_is_not_a_move() {
        let mut board = Board::empty();
        let ghost = Piece::new(PieceKind::Rook, Color::White, Square::A1);
        assert_eq!(
            attempt_move(&mut board, ghost, Square::A8),
            Err(MoveRejection::NoPieceSelected { square: Square::A1 })
        );
        assert_eq!(board, Board::empty());
    }
}
