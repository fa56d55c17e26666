use std::fmt::{self, Display, Formatter};

use crate::alliance::Alliance;

/// How a finished game ended. Checkmate wins for the side that delivered it,
/// stalemate is a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndState {
    Win(Alliance),
    Draw,
}
impl EndState {
    pub fn winner(self) -> Option<Alliance> {
        match self {
            EndState::Win(alliance) => Some(alliance),
            EndState::Draw => None,
        }
    }
}
impl Display for EndState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EndState::Win(alliance) => write!(f, "{alliance} wins")?,
            EndState::Draw => write!(f, "draw")?,
        }
        Ok(())
    }
}
