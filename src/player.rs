use std::fmt::{self, Display, Formatter};

use crate::{
    alliance::Alliance,
    board::Board,
    coord::Coord,
    moves::Move,
    piece::Piece,
    transition::{MoveStatus, MoveTransition},
};

/// Where a player stands on one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerState {
    Normal,
    InCheck,
    CheckMate,
    StaleMate,
}
impl Display for PlayerState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PlayerState::Normal => write!(f, "normal")?,
            PlayerState::InCheck => write!(f, "in check")?,
            PlayerState::CheckMate => write!(f, "checkmate")?,
            PlayerState::StaleMate => write!(f, "stalemate")?,
        }
        Ok(())
    }
}

/// The moves in `moves` that land on `position`.
pub fn attacks_on_tile(position: Coord, moves: &[Move]) -> impl Iterator<Item = Move> + '_ {
    moves
        .iter()
        .copied()
        .filter(move |movement| movement.destination() == position)
}

/// One side of a board. A player is a view borrowed from its board and holds
/// no state of its own.
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Board,
    alliance: Alliance,
}
impl<'a> Player<'a> {
    pub(crate) fn new(board: &'a Board, alliance: Alliance) -> Self {
        Player { board, alliance }
    }
    pub fn board(self) -> &'a Board {
        self.board
    }
    pub fn alliance(self) -> Alliance {
        self.alliance
    }
    pub fn opponent(self) -> Player<'a> {
        Player::new(self.board, !self.alliance)
    }
    /// # Panics
    /// Panics when the board has no king of this alliance, which a board from
    /// [`BoardBuilder::build`](crate::board::BoardBuilder::build) or from
    /// playing moves never lacks.
    pub fn king(self) -> Piece {
        match self.board.king(self.alliance) {
            Some(king) => king,
            None => panic!("no {} king on the board", self.alliance),
        }
    }
    pub fn active_pieces(self) -> impl Iterator<Item = Piece> + 'a {
        self.board.active_pieces(self.alliance)
    }
    /// Pseudo-legal moves: every move of every piece, including those that
    /// would leave the king attacked.
    pub fn legal_moves(self) -> &'a [Move] {
        self.board.legal_moves(self.alliance)
    }
    pub fn is_castled(self) -> bool {
        self.king().is_castled()
    }
    pub fn is_king_side_castle_capable(self) -> bool {
        self.king().is_king_side_castle_capable()
    }
    pub fn is_queen_side_castle_capable(self) -> bool {
        self.king().is_queen_side_castle_capable()
    }
    pub fn is_in_check(self) -> bool {
        attacks_on_tile(self.king().position(), self.opponent().legal_moves())
            .next()
            .is_some()
    }
    pub fn is_in_check_mate(self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }
    pub fn is_in_stale_mate(self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }
    pub fn state(self) -> PlayerState {
        match (self.is_in_check(), self.has_escape_moves()) {
            (false, true) => PlayerState::Normal,
            (true, true) => PlayerState::InCheck,
            (true, false) => PlayerState::CheckMate,
            (false, false) => PlayerState::StaleMate,
        }
    }
    fn has_escape_moves(self) -> bool {
        self.legal_moves()
            .iter()
            .any(|movement| self.attempt(*movement).status().is_done())
    }
    /// The pseudo-legal moves that do not leave the king attacked. Only the
    /// side to move can play them.
    pub fn playable_moves(self) -> impl Iterator<Item = Move> + 'a {
        self.legal_moves()
            .iter()
            .copied()
            .filter(move |movement| self.attempt(*movement).status().is_done())
    }
    /// Attempts `movement`. The board this player belongs to is never changed;
    /// a played move yields a new board. Moves of the side not to move are
    /// illegal.
    pub fn make_move(self, movement: Move) -> MoveTransition<'a> {
        if self.alliance != self.board.move_maker() {
            log::debug!(
                "{movement} rejected for {}: not their turn",
                self.alliance
            );
            return MoveTransition::rejected(self.board, movement, MoveStatus::IllegalMove);
        }
        self.attempt(movement)
    }
    // legality of `movement` regardless of whose turn it is
    fn attempt(self, movement: Move) -> MoveTransition<'a> {
        if !self.legal_moves().contains(&movement) {
            log::debug!(
                "{movement} rejected for {}: {}",
                self.alliance,
                MoveStatus::IllegalMove
            );
            return MoveTransition::rejected(self.board, movement, MoveStatus::IllegalMove);
        }
        let candidate = movement.apply(self.board);
        let exposed = candidate.king(self.alliance).is_some_and(|king| {
            attacks_on_tile(king.position(), candidate.legal_moves(!self.alliance))
                .next()
                .is_some()
        });
        if exposed {
            log::debug!(
                "{movement} rejected for {}: {}",
                self.alliance,
                MoveStatus::LeavesPlayerInCheck
            );
            return MoveTransition::rejected(
                self.board,
                movement,
                MoveStatus::LeavesPlayerInCheck,
            );
        }
        log::trace!("{} plays {movement}", self.alliance);
        MoveTransition::done(self.board, candidate, movement)
    }
}
