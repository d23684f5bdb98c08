//! Error types for coordinates, move legality, and saved-game records.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A coordinate that does not name a square on the board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    /// Notation was not exactly two characters long.
    #[error("invalid position format: expected 2 characters, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },
    /// The file letter or rank digit lies outside the board.
    #[error("position \"{notation}\" is out of bounds, stay inside the board")]
    OutOfBounds {
        /// The rejected notation.
        notation: String,
    },
    /// Raw indices lie outside `0..8`.
    #[error("indices ({rank}, {file}) are out of bounds, stay inside the board")]
    IndexOutOfRange {
        /// The rejected rank index.
        rank: i32,
        /// The rejected file index.
        file: i32,
    },
}

/// The reason a requested move was refused. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    /// The displacement does not match how the piece moves.
    #[error("a {kind} cannot move that way")]
    WrongGeometry {
        /// Kind of the piece that was asked to move.
        kind: PieceKind,
    },
    /// Another piece stands between the source and the destination.
    #[error("another piece is in the way")]
    Blocked,
    /// The destination holds a piece of the mover's own color.
    #[error("the destination holds one of your own pieces")]
    FriendlyFire,
    /// A pawn moved diagonally onto an empty square.
    #[error("a pawn may only move diagonally to capture")]
    NotACapture,
    /// The source square is empty.
    #[error("no piece on {square}")]
    NoPieceSelected {
        /// The empty source square.
        square: Square,
    },
    /// The piece on the source square belongs to the other side.
    #[error("the piece on {square} belongs to your opponent")]
    WrongOwner {
        /// The source square.
        square: Square,
    },
    /// The piece handed to the rules is not the one standing on its square.
    #[error("the piece on {square} does not match the piece being moved")]
    StalePiece {
        /// The source square.
        square: Square,
    },
}

/// Errors surfaced by [`submit_move`](crate::submit_move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// One of the two coordinates could not be parsed.
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] LocationError),
    /// The move was parsed but refused.
    #[error("invalid move: {0}")]
    Rejected(#[from] MoveRejection),
}

/// Errors that occur when parsing a saved-game record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The record has no turn line.
    MissingTurn,
    /// The turn line or a piece color is not a known color name.
    InvalidColor {
        /// One-based line number.
        line: usize,
        /// The invalid color string.
        found: String,
    },
    /// A square line does not have exactly four comma-separated fields.
    MalformedLine {
        /// One-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
    /// A rank or file field is not an integer.
    InvalidIndex {
        /// One-based line number.
        line: usize,
        /// The invalid field.
        found: String,
    },
    /// The kind field is not a piece name or `empty`.
    InvalidKind {
        /// One-based line number.
        line: usize,
        /// The invalid field.
        found: String,
    },
    /// The rank and file fields do not name a square.
    InvalidLocation {
        /// One-based line number.
        line: usize,
        /// The underlying coordinate error.
        source: LocationError,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MissingTurn => write!(f, "record is empty, expected a turn line"),
            RecordError::InvalidColor { line, found } => {
                write!(f, "line {line}: invalid color \"{found}\"")
            }
            RecordError::MalformedLine { line, content } => {
                write!(f, "line {line}: expected rank,file,kind,color but found \"{content}\"")
            }
            RecordError::InvalidIndex { line, found } => {
                write!(f, "line {line}: invalid index \"{found}\"")
            }
            RecordError::InvalidKind { line, found } => {
                write!(f, "line {line}: invalid piece kind \"{found}\"")
            }
            RecordError::InvalidLocation { line, source } => {
                write!(f, "line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::InvalidLocation { source, .. } => Some(source),
            _ => None,
        }
    }
}
