//! Knight legality.

use crate::board::{Board, displacement};
use crate::color::Color;
use crate::error::MoveRejection;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::empty_or_enemy;

/// A knight jumps, so nothing between the squares is ever consulted.
pub(super) fn validate(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
) -> Result<(), MoveRejection> {
    let (d_rank, d_file) = displacement(from, to);
    match (d_rank.abs(), d_file.abs()) {
        (1, 2) | (2, 1) => empty_or_enemy(board, color, to),
        _ => Err(MoveRejection::WrongGeometry {
            kind: PieceKind::Knight,
        }),
    }
}
