use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::{alliance::Alliance, coord::Coord, tables::location_bonus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const ALL: [Self; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
    pub const PROMOTION_CHOICES: [Self; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }
    pub fn is_promotion_choice(self) -> bool {
        Self::PROMOTION_CHOICES.contains(&self)
    }
    pub fn uppercase(self) -> char {
        self.lowercase().to_ascii_uppercase()
    }
    pub fn lowercase(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Queen => write!(f, "queen")?,
            PieceKind::King => write!(f, "king")?,
        }
        Ok(())
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsePieceKindError {
    Empty,
    UnknownSymbol(char),
    UnexpectedSymbol(char),
}
impl Display for ParsePieceKindError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParsePieceKindError::Empty => write!(f, "expected one character, found none instead")?,
            ParsePieceKindError::UnknownSymbol(c) => write!(
                f,
                "`{c}` is neither of `p`, `n`, `b`, `r`, `q`, `k`, nor uppercase letter of any of these"
            )?,
            ParsePieceKindError::UnexpectedSymbol(c) => {
                write!(f, "unexpected `{c}`, only one character is expected")?;
            }
        }
        Ok(())
    }
}
impl Error for ParsePieceKindError {}

impl TryFrom<char> for PieceKind {
    type Error = ParsePieceKindError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let piece = match value {
            'p' | 'P' => PieceKind::Pawn,
            'n' | 'N' => PieceKind::Knight,
            'b' | 'B' => PieceKind::Bishop,
            'r' | 'R' => PieceKind::Rook,
            'q' | 'Q' => PieceKind::Queen,
            'k' | 'K' => PieceKind::King,
            c => return Err(ParsePieceKindError::UnknownSymbol(c)),
        };
        Ok(piece)
    }
}
impl FromStr for PieceKind {
    type Err = ParsePieceKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut characters = s.chars();
        let piece = characters
            .next()
            .ok_or(ParsePieceKindError::Empty)?
            .try_into()?;

        if let Some(c) = characters.next() {
            return Err(ParsePieceKindError::UnexpectedSymbol(c));
        }
        Ok(piece)
    }
}

/// Castling bookkeeping carried by kings. Every other kind holds the
/// all-false default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleState {
    pub is_castled: bool,
    pub king_side_capable: bool,
    pub queen_side_capable: bool,
}
impl CastleState {
    pub const CAPABLE: Self = CastleState {
        is_castled: false,
        king_side_capable: true,
        queen_side_capable: true,
    };
}

/// A piece standing on a particular tile. Pieces are plain values: moving
/// one produces a new `Piece` and two pieces are equal when every field is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    position: Coord,
    has_moved: bool,
    castle: CastleState,
}
impl Piece {
    pub fn new(kind: PieceKind, alliance: Alliance, position: Coord, has_moved: bool) -> Self {
        Piece {
            kind,
            alliance,
            position,
            has_moved,
            castle: CastleState::default(),
        }
    }
    pub fn king(alliance: Alliance, position: Coord, has_moved: bool, castle: CastleState) -> Self {
        Piece {
            kind: PieceKind::King,
            alliance,
            position,
            has_moved,
            castle,
        }
    }
    pub fn kind(self) -> PieceKind {
        self.kind
    }
    pub fn alliance(self) -> Alliance {
        self.alliance
    }
    pub fn position(self) -> Coord {
        self.position
    }
    pub fn has_moved(self) -> bool {
        self.has_moved
    }
    pub fn is_first_move(self) -> bool {
        !self.has_moved
    }
    pub fn is_castled(self) -> bool {
        self.castle.is_castled
    }
    pub fn is_king_side_castle_capable(self) -> bool {
        self.castle.king_side_capable
    }
    pub fn is_queen_side_castle_capable(self) -> bool {
        self.castle.queen_side_capable
    }
    pub fn value(self) -> i32 {
        self.kind.value()
    }
    pub fn location_bonus(self) -> i32 {
        location_bonus(self.kind, self.alliance, self.position)
    }
    /// The piece after a move to `destination`. A king loses both castling
    /// capabilities on its first move and remembers whether that move was a
    /// castle.
    pub fn moved_to(self, destination: Coord, castled: bool) -> Self {
        let castle = if self.kind == PieceKind::King {
            CastleState {
                is_castled: castled,
                king_side_capable: false,
                queen_side_capable: false,
            }
        } else {
            CastleState::default()
        };
        Piece {
            position: destination,
            has_moved: true,
            castle,
            ..self
        }
    }
    pub fn promoted_to(self, kind: PieceKind, destination: Coord) -> Self {
        debug_assert_eq!(self.kind, PieceKind::Pawn);
        Piece::new(kind, self.alliance, destination, true)
    }
    pub fn fen(self) -> char {
        match self.alliance {
            Alliance::White => self.kind.uppercase(),
            Alliance::Black => self.kind.lowercase(),
        }
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.alliance, self.kind, self.position)?;
        Ok(())
    }
}
