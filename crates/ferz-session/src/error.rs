//! Session errors.

use std::path::PathBuf;

use ferz_core::{EngineError, RecordError};

/// Errors that can occur while handling a line of user input.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A `:`-prefixed word that is not a known command.
    #[error("invalid command \"{command}\", type ':h' for help")]
    UnknownCommand {
        /// The unrecognized command word.
        command: String,
    },

    /// `:s` or `:o` without a filename.
    #[error("please provide a filename, for example '{command} mygame'")]
    MissingFilename {
        /// The command that needs a filename.
        command: String,
    },

    /// A filename that is not a plain name inside the save directory.
    #[error("invalid filename \"{name}\"")]
    InvalidFilename {
        /// The rejected filename.
        name: String,
    },

    /// A move that is not exactly two coordinates back to back.
    #[error(
        "invalid move format: expected two coordinates without a space, such as 'e2e4' \
         (found {found} characters)"
    )]
    MoveLength {
        /// Number of characters found.
        found: usize,
    },

    /// `:o` named a save that does not exist.
    #[error("save file {} not found", .path.display())]
    SaveNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// Writing a save file failed.
    #[error("error saving game to {}: {source}", .path.display())]
    SaveFailed {
        /// The save file being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Reading a save file failed.
    #[error("error loading game from {}: {source}", .path.display())]
    LoadFailed {
        /// The save file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The engine refused the move.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// A save file could not be parsed.
    #[error("corrupt save file: {0}")]
    Record(#[from] RecordError),

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
