//! Core types for a two-player board session: coordinates, the board,
//! per-piece move legality, move submission, and saved-game records.

mod board;
mod color;
mod engine;
mod error;
mod file;
mod piece;
mod piece_kind;
mod rank;
mod record;
mod rules;
mod square;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use engine::submit_move;
pub use error::{EngineError, LocationError, MoveRejection, RecordError};
pub use file::File;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use record::{GameRecord, Layout};
pub use rules::{MoveOutcome, attempt_move, validate_move};
pub use square::Square;
