//! Saved-game records: the side to act plus one line per square.
//!
//! ```text
//! WHITE
//! 0,0,Rook,WHITE
//! 0,1,Knight,WHITE
//! 3,4,empty,none
//! ```
//!
//! Each square line is `rank,file,kind,color` with zero-based indices.
//! `kind` is a piece name or `empty`; `color` is a color name or `none`.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::RecordError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Kind field written for an unoccupied square.
const EMPTY_KIND: &str = "empty";

/// Color field written for an unoccupied square.
const NO_COLOR: &str = "none";

/// Which squares a record lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Only occupied squares. The canonical form.
    #[default]
    Sparse,
    /// All 64 squares, with explicit `empty,none` lines.
    Dense,
}

/// A board together with the color whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// The side to act next.
    pub turn: Color,
    /// Piece placement.
    pub board: Board,
}

impl GameRecord {
    /// Bundle a board and turn.
    pub fn new(board: Board, turn: Color) -> GameRecord {
        GameRecord { turn, board }
    }

    /// Serialize using the given layout.
    pub fn to_string_with(&self, layout: Layout) -> String {
        WithLayout(self, layout).to_string()
    }

    fn write_layout(&self, w: &mut impl fmt::Write, layout: Layout) -> fmt::Result {
        writeln!(w, "{}", self.turn.name())?;
        for sq in Square::all() {
            let (rank, file) = (sq.rank().index(), sq.file().index());
            match self.board.piece_at(sq) {
                Some(piece) => writeln!(
                    w,
                    "{rank},{file},{},{}",
                    piece.kind().name(),
                    piece.color().name()
                )?,
                None if layout == Layout::Dense => {
                    writeln!(w, "{rank},{file},{EMPTY_KIND},{NO_COLOR}")?;
                }
                None => {}
            }
        }
        Ok(())
    }
}

impl fmt::Display for GameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_layout(f, Layout::Sparse)
    }
}

/// A record paired with the layout to print it in.
struct WithLayout<'a>(&'a GameRecord, Layout);

impl fmt::Display for WithLayout<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_layout(f, self.1)
    }
}

impl FromStr for GameRecord {
    type Err = RecordError;

    /// Parse either layout. Squares without a line are empty; a later line
    /// for the same square replaces an earlier one. Placement is not checked
    /// for legality.
    fn from_str(text: &str) -> Result<GameRecord, RecordError> {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

        let (turn_line, turn_text) = lines
            .by_ref()
            .find(|(_, l)| !l.is_empty())
            .ok_or(RecordError::MissingTurn)?;
        let turn = Color::from_name(turn_text).ok_or_else(|| RecordError::InvalidColor {
            line: turn_line,
            found: turn_text.to_string(),
        })?;

        let mut board = Board::empty();
        for (line, content) in lines.filter(|(_, l)| !l.is_empty()) {
            let (sq, piece) = parse_square_line(line, content)?;
            board.place(sq, piece);
        }

        Ok(GameRecord { turn, board })
    }
}

fn parse_square_line(line: usize, content: &str) -> Result<(Square, Option<Piece>), RecordError> {
    let fields: Vec<&str> = content.split(',').map(str::trim).collect();
    let [rank, file, kind, color] = fields[..] else {
        return Err(RecordError::MalformedLine {
            line,
            content: content.to_string(),
        });
    };

    let parse_index = |field: &str| {
        field.parse::<i32>().map_err(|_| RecordError::InvalidIndex {
            line,
            found: field.to_string(),
        })
    };
    let sq = Square::from_indices(parse_index(rank)?, parse_index(file)?)
        .map_err(|source| RecordError::InvalidLocation { line, source })?;

    if kind == EMPTY_KIND {
        return Ok((sq, None));
    }
    let kind = PieceKind::from_name(kind).ok_or_else(|| RecordError::InvalidKind {
        line,
        found: kind.to_string(),
    })?;
    let color = Color::from_name(color).ok_or_else(|| RecordError::InvalidColor {
        line,
        found: color.to_string(),
    })?;
    Ok((sq, Some(Piece::new(kind, color, sq))))
}
