//! Pawn legality: forward steps, the home-rank double step, and diagonal
//! captures. No en passant, no promotion.

use crate::board::{Board, displacement};
use crate::color::Color;
use crate::error::MoveRejection;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Rank index a pawn of this color starts on.
const fn home_rank(color: Color) -> usize {
    match color {
        Color::White => 1,
        Color::Black => 6,
    }
}

pub(super) fn validate(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
) -> Result<(), MoveRejection> {
    let forward = color.forward();
    let (d_rank, d_file) = displacement(from, to);

    match (d_rank * forward, d_file.abs()) {
        (1, 0) => {
            if board.is_occupied(to) {
                return Err(MoveRejection::Blocked);
            }
            Ok(())
        }
        (2, 0) if from.rank().index() == home_rank(color) => {
            let Some(intermediate) = from.offset(forward, 0) else {
                return Err(MoveRejection::WrongGeometry {
                    kind: PieceKind::Pawn,
                });
            };
            if board.is_occupied(to) || board.is_occupied(intermediate) {
                return Err(MoveRejection::Blocked);
            }
            Ok(())
        }
        (1, 1) => match board.piece_at(to) {
            None => Err(MoveRejection::NotACapture),
            Some(target) if target.color() == color => Err(MoveRejection::FriendlyFire),
            Some(_) => Ok(()),
        },
        _ => Err(MoveRejection::WrongGeometry {
            kind: PieceKind::Pawn,
        }),
    }
}
