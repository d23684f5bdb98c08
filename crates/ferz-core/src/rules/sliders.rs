//! Sliding piece (bishop, rook, queen) legality.

use crate::board::{Board, displacement};
use crate::color::Color;
use crate::error::MoveRejection;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::empty_or_enemy;

/// The line a slider would travel along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line {
    Horizontal,
    Vertical,
    Diagonal,
}

/// Classify the displacement. Zero displacement lies on no line.
fn line_between(from: Square, to: Square) -> Option<Line> {
    let (d_rank, d_file) = displacement(from, to);
    match (d_rank, d_file) {
        (0, 0) => None,
        (0, _) => Some(Line::Horizontal),
        (_, 0) => Some(Line::Vertical),
        _ if d_rank.abs() == d_file.abs() => Some(Line::Diagonal),
        _ => None,
    }
}

/// Check clearance along `line`, then the destination.
fn travel(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
    line: Line,
) -> Result<(), MoveRejection> {
    let clear = match line {
        Line::Horizontal => board.clear_horizontal(from, to),
        Line::Vertical => board.clear_vertical(from, to),
        Line::Diagonal => board.clear_diagonal(from, to),
    };
    if !clear {
        return Err(MoveRejection::Blocked);
    }
    empty_or_enemy(board, color, to)
}

pub(super) fn validate_rook(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
) -> Result<(), MoveRejection> {
    match line_between(from, to) {
        Some(line @ (Line::Horizontal | Line::Vertical)) => travel(board, color, from, to, line),
        _ => Err(MoveRejection::WrongGeometry {
            kind: PieceKind::Rook,
        }),
    }
}

pub(super) fn validate_bishop(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
) -> Result<(), MoveRejection> {
    match line_between(from, to) {
        Some(Line::Diagonal) => travel(board, color, from, to, Line::Diagonal),
        _ => Err(MoveRejection::WrongGeometry {
            kind: PieceKind::Bishop,
        }),
    }
}

pub(super) fn validate_queen(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
) -> Result<(), MoveRejection> {
    match line_between(from, to) {
        Some(line) => travel(board, color, from, to, line),
        None => Err(MoveRejection::WrongGeometry {
            kind: PieceKind::Queen,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{validate_bishop, validate_queen, validate_rook};
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::MoveRejection;
    use crate::piece_kind::PieceKind;
    use crate::rules::testing::board_with;
    use crate::square::Square;

    const WHITE: Color = Color::White;

    fn wrong(kind: PieceKind) -> Result<(), MoveRejection> {
        Err(MoveRejection::WrongGeometry { kind })
    }

    #[test]
    fn rook_lines() {
        let board = Board::empty();
        assert_eq!(validate_rook(&board, WHITE, Square::D4, Square::D8), Ok(()));
        assert_eq!(validate_rook(&board, WHITE, Square::D4, Square::A4), Ok(()));
        assert_eq!(
            validate_rook(&board, WHITE, Square::D4, Square::E5),
            wrong(PieceKind::Rook)
        );
        assert_eq!(
            validate_rook(&board, WHITE, Square::D4, Square::E6),
            wrong(PieceKind::Rook)
        );
        assert_eq!(
            validate_rook(&board, WHITE, Square::D4, Square::D4),
            wrong(PieceKind::Rook)
        );
    }

    #[test]
    fn rook_blocked_and_captures() {
        let board = board_with(&[
            (Square::A2, PieceKind::Pawn, Color::White),
            (Square::A6, PieceKind::Pawn, Color::Black),
            (Square::C1, PieceKind::Bishop, Color::White),
        ]);
        assert_eq!(
            validate_rook(&board, WHITE, Square::A1, Square::A8),
            Err(MoveRejection::Blocked)
        );
        assert_eq!(
            validate_rook(&board, WHITE, Square::A3, Square::A6),
            Ok(())
        );
        assert_eq!(
            validate_rook(&board, WHITE, Square::A3, Square::A7),
            Err(MoveRejection::Blocked)
        );
        assert_eq!(
            validate_rook(&board, WHITE, Square::A1, Square::C1),
            Err(MoveRejection::FriendlyFire)
        );
    }

    #[test]
    fn bishop_diagonals() {
        let board = board_with(&[(Square::F6, PieceKind::Pawn, Color::Black)]);
        assert_eq!(validate_bishop(&board, WHITE, Square::C3, Square::F6), Ok(()));
        assert_eq!(
            validate_bishop(&board, WHITE, Square::C3, Square::G7),
            Err(MoveRejection::Blocked)
        );
        assert_eq!(validate_bishop(&board, WHITE, Square::C3, Square::A5), Ok(()));
        assert_eq!(validate_bishop(&board, WHITE, Square::C3, Square::E1), Ok(()));
        assert_eq!(
            validate_bishop(&board, WHITE, Square::C3, Square::C5),
            wrong(PieceKind::Bishop)
        );
        assert_eq!(
            validate_bishop(&board, WHITE, Square::C3, Square::C3),
            wrong(PieceKind::Bishop)
        );
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let board = board_with(&[
            (Square::D6, PieceKind::Pawn, Color::White),
            (Square::F6, PieceKind::Pawn, Color::Black),
        ]);
        assert_eq!(validate_queen(&board, WHITE, Square::D4, Square::H4), Ok(()));
        assert_eq!(validate_queen(&board, WHITE, Square::D4, Square::D5), Ok(()));
        assert_eq!(validate_queen(&board, WHITE, Square::D4, Square::F6), Ok(()));
        assert_eq!(validate_queen(&board, WHITE, Square::D4, Square::A1), Ok(()));
        assert_eq!(
            validate_queen(&board, WHITE, Square::D4, Square::D8),
            Err(MoveRejection::Blocked)
        );
        assert_eq!(
            validate_queen(&board, WHITE, Square::D4, Square::G7),
            Err(MoveRejection::Blocked)
        );
        assert_eq!(
            validate_queen(&board, WHITE, Square::D4, Square::D6),
            Err(MoveRejection::FriendlyFire)
        );
        assert_eq!(
            validate_queen(&board, WHITE, Square::D4, Square::E6),
            wrong(PieceKind::Queen)
        );
        assert_eq!(
            validate_queen(&board, WHITE, Square::D4, Square::D4),
            wrong(PieceKind::Queen)
        );
    }
}
