//! Parsing of one line of user input.

use crate::error::SessionError;

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:h` -- print the help text.
    Help,
    /// `:s <name>` -- save the game.
    Save(String),
    /// `:o <name>` -- open a saved game.
    Open(String),
    /// `:x` -- leave after confirmation.
    Exit,
    /// Anything else: a move such as `e2e4`, split into its two halves.
    Move {
        /// Source coordinate text.
        from: String,
        /// Destination coordinate text.
        to: String,
    },
}

/// Parse a single trimmed line of input into a [`Command`].
///
/// Command words are case-insensitive; filenames keep their case. A move is
/// only checked for length here; its coordinates are parsed by the engine.
pub fn parse_command(line: &str) -> Result<Command, SessionError> {
    if line.starts_with(':') {
        return parse_colon_command(line);
    }

    let chars: Vec<char> = line.chars().collect();
    if chars.len() != 4 {
        return Err(SessionError::MoveLength { found: chars.len() });
    }
    Ok(Command::Move {
        from: chars[..2].iter().collect(),
        to: chars[2..].iter().collect(),
    })
}

fn parse_colon_command(line: &str) -> Result<Command, SessionError> {
    let mut parts = line.splitn(2, char::is_whitespace);
    let word = parts.next().unwrap_or_default().to_ascii_lowercase();
    let argument = parts.next().map(str::trim).filter(|a| !a.is_empty());

    match word.as_str() {
        ":h" => Ok(Command::Help),
        ":x" => Ok(Command::Exit),
        ":s" | ":o" => {
            let name = argument.ok_or_else(|| SessionError::MissingFilename {
                command: word.clone(),
            })?;
            if word == ":s" {
                Ok(Command::Save(name.to_string()))
            } else {
                Ok(Command::Open(name.to_string()))
            }
        }
        _ => Err(SessionError::UnknownCommand { command: word }),
    }
}
