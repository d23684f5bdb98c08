//! The interactive two-player session: board, turn, and the input loop.

use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use ferz_core::{Board, Color, GameRecord, MoveOutcome, submit_move};

use crate::command::{Command, parse_command};
use crate::error::SessionError;

/// Environment variable that overrides [`SessionConfig::save_dir`].
pub const SAVE_DIR_ENV: &str = "FERZ_SAVE_DIR";

const HELP: &str = "\
Available commands:
:h - Show this help message
:s [filename] - Save the current game (e.g., :s mygame)
:o [filename] - Open a saved game (e.g., :o mygame)
:x - Exit the game

Move format: 'e2e4' (from square to square). En passant, castling, and \
promotion are not implemented. There is no check, checkmate, or draw \
detection; exit the game manually when you are done.";

/// Where saved games live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory holding save files. Created on first save.
    pub save_dir: PathBuf,
    /// Extension appended to save names.
    pub extension: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("saved_games"),
            extension: "txt".to_string(),
        }
    }
}

impl SessionConfig {
    /// Defaults, with the save directory taken from `FERZ_SAVE_DIR` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = std::env::var_os(SAVE_DIR_ENV).filter(|d| !d.is_empty()) {
            config.save_dir = PathBuf::from(dir);
        }
        config
    }
}

/// A running game between two players sharing one input stream.
///
/// White moves first; the turn passes only after an accepted move.
pub struct GameSession {
    board: Board,
    turn: Color,
    config: SessionConfig,
}

impl GameSession {
    /// Start a game from the opening position.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            config,
        }
    }

    /// Return the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Return the color whose turn it is.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Play a move for the side to act and pass the turn if it is accepted.
    pub fn play_move(&mut self, from: &str, to: &str) -> Result<MoveOutcome, SessionError> {
        let outcome = submit_move(&mut self.board, from, to, self.turn)?;
        self.turn = self.turn.opponent();
        Ok(outcome)
    }

    /// Return the file a save called `name` lives in.
    pub fn save_path(&self, name: &str) -> Result<PathBuf, SessionError> {
        let plain = Path::new(name)
            .file_name()
            .is_some_and(|file| file == name);
        if !plain {
            return Err(SessionError::InvalidFilename {
                name: name.to_string(),
            });
        }
        Ok(self
            .config
            .save_dir
            .join(format!("{name}.{}", self.config.extension)))
    }

    /// Write the board and turn to the save called `name`.
    pub fn save(&self, name: &str) -> Result<PathBuf, SessionError> {
        let path = self.save_path(name)?;
        let record = GameRecord::new(self.board.clone(), self.turn);
        let written = fs::create_dir_all(&self.config.save_dir)
            .and_then(|()| fs::write(&path, record.to_string()));
        if let Err(source) = written {
            return Err(SessionError::SaveFailed { path, source });
        }
        info!(path = %path.display(), "game saved");
        Ok(path)
    }

    /// Replace the board and turn with the save called `name`.
    ///
    /// The current game is kept if the file is missing, unreadable or corrupt.
    pub fn open(&mut self, name: &str) -> Result<PathBuf, SessionError> {
        let path = self.save_path(name)?;
        if !path.is_file() {
            return Err(SessionError::SaveNotFound { path });
        }
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(source) => return Err(SessionError::LoadFailed { path, source }),
        };
        let record: GameRecord = text.parse()?;
        self.board = record.board;
        self.turn = record.turn;
        info!(path = %path.display(), turn = %self.turn, "game loaded");
        Ok(path)
    }

    /// Run the input loop until input ends or the players confirm `:x`.
    ///
    /// User mistakes are reported on `output` and the loop carries on; only
    /// I/O failures on `input` or `output` end it with an error.
    pub fn run<R: BufRead, W: Write>(mut self, input: R, mut output: W) -> Result<(), SessionError> {
        let mut lines = input.lines();
        loop {
            writeln!(output, "{}", self.board.pretty())?;
            writeln!(output, "{}'s turn", self.turn)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let line = line.trim();
            debug!(input = %line, "received line");

            let command = match parse_command(line) {
                Ok(command) => command,
                Err(e) => {
                    report(&mut output, &e)?;
                    continue;
                }
            };

            let result = match command {
                Command::Help => writeln!(output, "{HELP}").map_err(SessionError::from),
                Command::Save(name) => self
                    .save(&name)
                    .and_then(|_| Ok(writeln!(output, "Game saved successfully to {name}")?)),
                Command::Open(name) => self
                    .open(&name)
                    .and_then(|_| Ok(writeln!(output, "Game loaded successfully from {name}")?)),
                Command::Move { from, to } => self.play_move(&from, &to).and_then(|outcome| {
                    if let Some(victim) = outcome.captured() {
                        writeln!(output, "{} captured on {to}", victim.kind())?;
                    }
                    Ok(())
                }),
                Command::Exit => {
                    write!(
                        output,
                        "Are you sure you want to exit? Make sure to save your game before exiting. (y/n): "
                    )?;
                    output.flush()?;
                    match lines.next().transpose()? {
                        Some(answer) if answer.trim().eq_ignore_ascii_case("y") => break,
                        Some(_) => Ok(()),
                        None => break,
                    }
                }
            };

            if let Err(e) = result {
                if let SessionError::Io { .. } = e {
                    return Err(e);
                }
                report(&mut output, &e)?;
            }
        }

        info!("session ended");
        Ok(())
    }
}

fn report<W: Write>(output: &mut W, error: &SessionError) -> Result<(), SessionError> {
    warn!(%error, "input rejected");
    writeln!(output, "{error}")?;
    Ok(())
}
