//! Interactive text session for ferz: command parsing, turn alternation,
//! and saved-game files.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::SessionError;
pub use session::{GameSession, SAVE_DIR_ENV, SessionConfig};
