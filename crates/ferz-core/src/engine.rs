//! Move submission: parse, look up, check ownership, dispatch.

use tracing::debug;

use crate::board::Board;
use crate::color::Color;
use crate::error::{EngineError, MoveRejection};
use crate::rules::{MoveOutcome, attempt_move};
use crate::square::Square;

/// Apply one move for `mover`, given in coordinate notation.
///
/// The move is atomic: it is either applied in full or the board is left
/// exactly as it was. Turn order is the caller's business; this only checks
/// that the selected piece belongs to `mover`.
pub fn submit_move(
    board: &mut Board,
    from_text: &str,
    to_text: &str,
    mover: Color,
) -> Result<MoveOutcome, EngineError> {
    let from = Square::from_notation(from_text)?;
    let to = Square::from_notation(to_text)?;

    let piece = board
        .piece_at(from)
        .ok_or(MoveRejection::NoPieceSelected { square: from })?;
    if piece.color() != mover {
        return Err(MoveRejection::WrongOwner { square: from }.into());
    }

    match attempt_move(board, piece, to) {
        Ok(outcome) => {
            debug!(
                %from,
                %to,
                kind = %piece.kind(),
                captured = ?outcome.captured().map(|p| p.kind()),
                "move applied"
            );
            Ok(outcome)
        }
        Err(reason) => {
            debug!(%from, %to, kind = %piece.kind(), %reason, "move rejected");
            Err(reason.into())
        }
    }
}
