use std::{
    borrow::Cow,
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{board::Board, moves::Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Done,
    /// The move is not among the player's pseudo-legal moves.
    IllegalMove,
    /// Playing the move would leave the mover's own king attacked.
    LeavesPlayerInCheck,
}
impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}
impl Display for MoveStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveStatus::Done => write!(f, "done")?,
            MoveStatus::IllegalMove => write!(f, "illegal move")?,
            MoveStatus::LeavesPlayerInCheck => write!(f, "leaves player in check")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRejected {
    pub movement: Move,
    pub status: MoveStatus,
}
impl Display for MoveRejected {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} rejected: {}", self.movement, self.status)?;
        Ok(())
    }
}
impl Error for MoveRejected {}

/// Outcome of [`Player::make_move`](crate::player::Player::make_move). A
/// rejected attempt carries the board it started from, never the discarded
/// candidate.
#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    from_board: &'a Board,
    to_board: Cow<'a, Board>,
    transition_move: Move,
    status: MoveStatus,
}
impl<'a> MoveTransition<'a> {
    pub(crate) fn done(from_board: &'a Board, to_board: Board, transition_move: Move) -> Self {
        MoveTransition {
            from_board,
            to_board: Cow::Owned(to_board),
            transition_move,
            status: MoveStatus::Done,
        }
    }
    pub(crate) fn rejected(board: &'a Board, transition_move: Move, status: MoveStatus) -> Self {
        debug_assert!(!status.is_done());
        MoveTransition {
            from_board: board,
            to_board: Cow::Borrowed(board),
            transition_move,
            status,
        }
    }
    pub fn from_board(&self) -> &'a Board {
        self.from_board
    }
    /// The board after the move, or the unchanged starting board when the move
    /// was rejected.
    pub fn to_board(&self) -> &Board {
        &self.to_board
    }
    pub fn transition_move(&self) -> Move {
        self.transition_move
    }
    pub fn status(&self) -> MoveStatus {
        self.status
    }
    pub fn into_board(self) -> Board {
        self.to_board.into_owned()
    }
    /// # Errors
    /// Returns the move and the reason when it was not played.
    pub fn into_result(self) -> Result<Board, MoveRejected> {
        if self.status.is_done() {
            Ok(self.into_board())
        } else {
            Err(MoveRejected {
                movement: self.transition_move,
                status: self.status,
            })
        }
    }
}
