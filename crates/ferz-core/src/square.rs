//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use crate::error::LocationError;
use crate::file::File;
use crate::rank::Rank;

/// A validated square on the board, stored as `rank * 8 + file`.
///
/// A1 = 0, B1 = 1, ..., H8 = 63. Every value of this type names a real
/// square; the two fallible constructors are the only way in from user data.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a rank and file.
    #[inline]
    pub const fn new(rank: Rank, file: File) -> Square {
        Square(rank.index() as u8 * 8 + file.index() as u8)
    }

    /// Parse two-character notation such as `"e4"`: a file letter
    /// `a..=h` followed by a rank digit `1..=8`.
    pub fn from_notation(notation: &str) -> Result<Square, LocationError> {
        let mut chars = notation.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(LocationError::WrongLength {
                found: notation.chars().count(),
            });
        };

        match (File::from_letter(file_char), Rank::from_digit(rank_char)) {
            (Some(file), Some(rank)) => Ok(Square::new(rank, file)),
            _ => Err(LocationError::OutOfBounds {
                notation: notation.to_string(),
            }),
        }
    }

    /// Create a square from zero-based rank and file indices.
    pub fn from_indices(rank: i32, file: i32) -> Result<Square, LocationError> {
        let rank_idx = u8::try_from(rank).ok().and_then(Rank::from_index);
        let file_idx = u8::try_from(file).ok().and_then(File::from_index);
        match (rank_idx, file_idx) {
            (Some(r), Some(f)) => Ok(Square::new(r, f)),
            _ => Err(LocationError::IndexOutOfRange { rank, file }),
        }
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.0 / 8) as usize]
    }

    /// Return the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        File::ALL[(self.0 % 8) as usize]
    }

    /// Return the two-character notation, the inverse of [`Square::from_notation`].
    pub fn to_notation(self) -> String {
        self.to_string()
    }

    /// Return the square displaced by the given rank and file deltas, or
    /// `None` if that leaves the board.
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Square> {
        let rank = self.rank().index() as i32 + i32::from(d_rank);
        let file = self.file().index() as i32 + i32::from(d_file);
        Square::from_indices(rank, file).ok()
    }

    /// Iterate over all 64 squares in index order (A1, B1, ..., H8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A2: Square = Square(8);
    pub const B2: Square = Square(9);
    pub const C2: Square = Square(10);
    pub const D2: Square = Square(11);
    pub const E2: Square = Square(12);
    pub const F2: Square = Square(13);
    pub const G2: Square = Square(14);
    pub const H2: Square = Square(15);
    pub const A3: Square = Square(16);
    pub const B3: Square = Square(17);
    pub const C3: Square = Square(18);
    pub const D3: Square = Square(19);
    pub const E3: Square = Square(20);
    pub const F3: Square = Square(21);
    pub const G3: Square = Square(22);
    pub const H3: Square = Square(23);
    pub const A4: Square = Square(24);
    pub const B4: Square = Square(25);
    pub const C4: Square = Square(26);
    pub const D4: Square = Square(27);
    pub const E4: Square = Square(28);
    pub const F4: Square = Square(29);
    pub const G4: Square = Square(30);
    pub const H4: Square = Square(31);
    pub const A5: Square = Square(32);
    pub const B5: Square = Square(33);
    pub const C5: Square = Square(34);
    pub const D5: Square = Square(35);
    pub const E5: Square = Square(36);
    pub const F5: Square = Square(37);
    pub const G5: Square = Square(38);
    pub const H5: Square = Square(39);
    pub const A6: Square = Square(40);
    pub const B6: Square = Square(41);
    pub const C6: Square = Square(42);
    pub const D6: Square = Square(43);
    pub const E6: Square = Square(44);
    pub const F6: Square = Square(45);
    pub const G6: Square = Square(46);
    pub const H6: Square = Square(47);
    pub const A7: Square = Square(48);
    pub const B7: Square = Square(49);
    pub const C7: Square = Square(50);
    pub const D7: Square = Square(51);
    pub const E7: Square = Square(52);
    pub const F7: Square = Square(53);
    pub const G7: Square = Square(54);
    pub const H7: Square = Square(55);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Square, LocationError> {
        Square::from_notation(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::error::LocationError;
    use crate::file::File;
    use crate::rank::Rank;

    #[test]
    fn new_and_accessors() {
        let sq = Square::new(Rank::R1, File::A);
        assert_eq!(sq, Square::A1);
        assert_eq!(sq.rank(), Rank::R1);
        assert_eq!(sq.file(), File::A);
        assert_eq!(Square::E4.rank(), Rank::R4);
        assert_eq!(Square::E4.file(), File::E);
    }

    #[test]
    fn notation_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_notation(&sq.to_notation()), Ok(sq));
        }
        assert_eq!(Square::E4.to_notation(), "e4");
        assert_eq!("h8".parse::<Square>(), Ok(Square::H8));
    }

    #[test]
    fn notation_wrong_length() {
        assert_eq!(
            Square::from_notation(""),
            Err(LocationError::WrongLength { found: 0 })
        );
        assert_eq!(
            Square::from_notation("a"),
            Err(LocationError::WrongLength { found: 1 })
        );
        assert_eq!(
            Square::from_notation("a1b"),
            Err(LocationError::WrongLength { found: 3 })
        );
    }

    #[test]
    fn notation_out_of_bounds() {
        for bad in ["z9", "i1", "a9", "a0", "A1", "1a", ".."] {
            assert!(
                matches!(
                    Square::from_notation(bad),
                    Err(LocationError::OutOfBounds { .. })
                ),
                "{bad} should be out of bounds"
            );
        }
    }

    #[test]
    fn multibyte_input_is_rejected() {
        assert!(Square::from_notation("é4").is_err());
        assert!(Square::from_notation("a١").is_err());
    }

    #[test]
    fn indices() {
        assert_eq!(Square::from_indices(0, 0), Ok(Square::A1));
        assert_eq!(Square::from_indices(3, 4), Ok(Square::E4));
        assert_eq!(Square::from_indices(7, 7), Ok(Square::H8));
        for (rank, file) in [(-1, 0), (0, -1), (8, 0), (0, 8), (100, 100)] {
            assert_eq!(
                Square::from_indices(rank, file),
                Err(LocationError::IndexOutOfRange { rank, file })
            );
        }
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::E2.offset(2, 0), Some(Square::E4));
        assert_eq!(Square::B1.offset(2, 1), Some(Square::C3));
        assert_eq!(Square::A1.offset(-1, 0), None);
        assert_eq!(Square::H8.offset(0, 1), None);
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), Square::COUNT);
    }

    #[test]
    fn debug_shows_notation() {
        assert_eq!(format!("{:?}", Square::E4), "Square(e4)");
    }
}
