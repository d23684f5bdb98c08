//! King legality. No castling.

use crate::board::{Board, displacement};
use crate::color::Color;
use crate::error::MoveRejection;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::empty_or_enemy;

/// One square in any direction. Zero displacement passes the geometry check
/// and is then refused by the destination check, since the king's own square
/// holds a piece of its own color.
pub(super) fn validate(
    board: &Board,
    color: Color,
    from: Square,
    to: Square,
) -> Result<(), MoveRejection> {
    let (d_rank, d_file) = displacement(from, to);
    if d_rank.abs().max(d_file.abs()) > 1 {
        return Err(MoveRejection::WrongGeometry {
            kind: PieceKind::King,
        });
    }
    empty_or_enemy(board, color, to)
}
