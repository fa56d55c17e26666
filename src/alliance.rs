use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Not,
    str::FromStr,
};

use crate::coord::{Coord, EIGHTH_RANK, FIRST_RANK, SECOND_RANK, SEVENTH_RANK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseAllianceError;
impl Display for ParseAllianceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "provided string was not `w`, `b`, `W`, `B`, `white`, or `black`"
        )?;
        Ok(())
    }
}
impl Error for ParseAllianceError {}

/// The side a piece fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alliance {
    White,
    Black,
}
impl Alliance {
    pub const ALL: [Self; 2] = [Alliance::White, Alliance::Black];

    /// Row step of a pawn advancing for this alliance. Row 0 is Black's back
    /// rank, so White walks toward lower coordinates.
    pub fn direction(self) -> i8 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }
    pub fn opposite_direction(self) -> i8 {
        -self.direction()
    }
    pub fn is_white(self) -> bool {
        self == Alliance::White
    }
    pub fn is_black(self) -> bool {
        self == Alliance::Black
    }
    pub fn is_pawn_start_square(self, position: Coord) -> bool {
        match self {
            Alliance::White => SECOND_RANK[position.index()],
            Alliance::Black => SEVENTH_RANK[position.index()],
        }
    }
    pub fn is_pawn_promotion_square(self, position: Coord) -> bool {
        match self {
            Alliance::White => EIGHTH_RANK[position.index()],
            Alliance::Black => FIRST_RANK[position.index()],
        }
    }
    /// Row holding this alliance's king and rooks at the start of a game.
    pub fn home_row(self) -> u8 {
        match self {
            Alliance::White => 7,
            Alliance::Black => 0,
        }
    }
    pub(crate) fn index(self) -> usize {
        match self {
            Alliance::White => 0,
            Alliance::Black => 1,
        }
    }
    pub fn lowercase(self) -> char {
        match self {
            Alliance::White => 'w',
            Alliance::Black => 'b',
        }
    }
}
impl Display for Alliance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => write!(f, "white")?,
            Alliance::Black => write!(f, "black")?,
        }
        Ok(())
    }
}
impl FromStr for Alliance {
    type Err = ParseAllianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let alliance = match s {
            "w" | "W" | "white" => Alliance::White,
            "b" | "B" | "black" => Alliance::Black,
            _ => return Err(ParseAllianceError),
        };
        Ok(alliance)
    }
}
impl Not for Alliance {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }
}
