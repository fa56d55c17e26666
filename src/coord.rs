//! Board coordinates and the read-only geometry tables built over them.
//!
//! A coordinate is a row-major index in `0..64`. Row 0 is Black's back rank,
//! so `a8` is 0 and `h1` is 63. Adding a raw offset to an index does not
//! notice when a step leaves the board through the left or right edge, which
//! is what [`WRAP_EXCLUSIONS`] is for.

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseCoordError {
    Empty,
    RankNotProvided,
    InvalidFile(char),
    InvalidRank(char),
    UnexpectedSymbol(char),
}
impl Display for ParseCoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::Empty => write!(f, "expected 2 characters, found none instead")?,
            ParseCoordError::RankNotProvided => {
                write!(f, "expected 2 characters, found 1 instead")?;
            }
            ParseCoordError::InvalidFile(c) => write!(f, "`{c}` is not a letter from a to h")?,
            ParseCoordError::InvalidRank(c) => write!(f, "`{c}` is not a number from 1 to 8")?,
            ParseCoordError::UnexpectedSymbol(c) => {
                write!(f, "unexpected `{c}`, only 2 characters are expected")?;
            }
        }
        Ok(())
    }
}
impl Error for ParseCoordError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord(u8);

impl Coord {
    /// # Panics
    /// Panics in debug builds when `index` is off the board.
    pub fn new(index: u8) -> Self {
        debug_assert!(usize::from(index) < NUM_TILES, "{index} should be < 64");
        Coord(index)
    }
    pub fn new_checked(index: i16) -> Option<Self> {
        if is_valid_tile_coordinate(index) {
            u8::try_from(index).ok().map(Coord)
        } else {
            None
        }
    }
    pub fn from_row_column(row: u8, column: u8) -> Self {
        debug_assert!(row < 8);
        debug_assert!(column < 8);
        Coord(row * 8 + column)
    }
    /// Parses a square literal such as `"e4"`. Meant for constant contexts
    /// (see the `coord!` macro), where a bad literal fails the build.
    ///
    /// # Panics
    /// Panics when `square` is not a file letter followed by a rank digit.
    pub const fn from_literal(square: &str) -> Self {
        let bytes = square.as_bytes();
        assert!(bytes.len() == 2, "square literal must have 2 characters");
        let file = bytes[0];
        let rank = bytes[1];
        assert!(file >= b'a' && file <= b'h', "file must be from a to h");
        assert!(rank >= b'1' && rank <= b'8', "rank must be from 1 to 8");
        Coord((7 - (rank - b'1')) * 8 + (file - b'a'))
    }
    pub fn from_chars(file: char, rank: char) -> Result<Self, ParseCoordError> {
        let column = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return Err(ParseCoordError::InvalidFile(file)),
        };
        let row = match rank {
            '1'..='8' => 7 - (rank as u8 - b'1'),
            _ => return Err(ParseCoordError::InvalidRank(rank)),
        };
        Ok(Coord::from_row_column(row, column))
    }
    pub fn index(self) -> usize {
        self.0.into()
    }
    pub fn row(self) -> u8 {
        self.0 / 8
    }
    pub fn column(self) -> u8 {
        self.0 % 8
    }
    /// The coordinate `offset` tiles away, or `None` when the step leaves the
    /// board, either past the first or last row or by wrapping around a side.
    pub fn offset(self, offset: i8) -> Option<Self> {
        if is_wrap_excluded(self, offset) {
            None
        } else {
            Coord::new_checked(i16::from(self.0) + i16::from(offset))
        }
    }
    /// Same coordinate seen from the other side of the board.
    pub fn mirrored(self) -> Self {
        Coord(self.0 ^ 0b_111_000)
    }
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64).map(Coord)
    }
}
pub fn is_valid_tile_coordinate(index: i16) -> bool {
    (0..64).contains(&index)
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = (self.column() + b'a') as char;
        let rank = 8 - self.row();
        write!(f, "{file}{rank}")?;
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.chars();
        let file = characters.next().ok_or(ParseCoordError::Empty)?;
        let rank = characters.next().ok_or(ParseCoordError::RankNotProvided)?;
        let coord = Coord::from_chars(file, rank)?;
        if let Some(c) = characters.next() {
            return Err(ParseCoordError::UnexpectedSymbol(c));
        }
        Ok(coord)
    }
}

const fn column_mask(column: usize) -> [bool; NUM_TILES] {
    let mut mask = [false; NUM_TILES];
    let mut index = column;
    while index < NUM_TILES {
        mask[index] = true;
        index += NUM_TILES_PER_ROW;
    }
    mask
}
const fn row_mask(row: usize) -> [bool; NUM_TILES] {
    let mut mask = [false; NUM_TILES];
    let mut index = row * NUM_TILES_PER_ROW;
    while index < (row + 1) * NUM_TILES_PER_ROW {
        mask[index] = true;
        index += 1;
    }
    mask
}

pub const FIRST_COLUMN: [bool; NUM_TILES] = column_mask(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = column_mask(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = column_mask(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = column_mask(7);

pub const EIGHTH_RANK: [bool; NUM_TILES] = row_mask(0);
pub const SEVENTH_RANK: [bool; NUM_TILES] = row_mask(1);
pub const SECOND_RANK: [bool; NUM_TILES] = row_mask(6);
pub const FIRST_RANK: [bool; NUM_TILES] = row_mask(7);

/// Largest offset any piece steps by (a knight's long jump).
pub const MAX_OFFSET: i8 = 17;
const EXCLUSION_TABLE_SIZE: usize = MAX_OFFSET as usize * 2 + 1;

// column shift implied by an offset in -17..=17
const fn column_shift(offset: i8) -> i8 {
    (offset + 4).rem_euclid(8) - 4
}
const fn wrap_exclusions() -> [[bool; NUM_TILES]; EXCLUSION_TABLE_SIZE] {
    let mut table = [[false; NUM_TILES]; EXCLUSION_TABLE_SIZE];
    let mut slot = 0;
    while slot < EXCLUSION_TABLE_SIZE {
        let shift = column_shift(slot as i8 - MAX_OFFSET);
        let mut index = 0;
        while index < NUM_TILES {
            let column = (index % NUM_TILES_PER_ROW) as i8;
            table[slot][index] = column + shift < 0 || column + shift > 7;
            index += 1;
        }
        slot += 1;
    }
    table
}

/// For each offset in `-17..=17`, the starting tiles from which that offset
/// would wrap around a side of the board. Knight offsets of ±6/±10 exclude
/// two columns, the others exclude at most one.
pub static WRAP_EXCLUSIONS: [[bool; NUM_TILES]; EXCLUSION_TABLE_SIZE] = wrap_exclusions();

/// # Panics
/// Panics when `offset` is outside `-17..=17`.
pub fn is_wrap_excluded(position: Coord, offset: i8) -> bool {
    assert!(
        (-MAX_OFFSET..=MAX_OFFSET).contains(&offset),
        "{offset} is not a piece offset"
    );
    WRAP_EXCLUSIONS[usize::from(offset.abs_diff(-MAX_OFFSET))][position.index()]
}
