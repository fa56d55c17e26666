use crate::piece::Piece;

/// One cell of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Occupied(Piece),
}
impl Tile {
    pub fn is_occupied(self) -> bool {
        matches!(self, Tile::Occupied(_))
    }
    pub fn piece(self) -> Option<Piece> {
        match self {
            Tile::Empty => None,
            Tile::Occupied(piece) => Some(piece),
        }
    }
}
impl From<Option<Piece>> for Tile {
    fn from(value: Option<Piece>) -> Self {
        value.map_or(Tile::Empty, Tile::Occupied)
    }
}
