//! Pseudo-legal move generation, one file per piece kind.
//!
//! Moves produced here never leave the board, never land on a friendly
//! piece and never jump through a blocker. Whether a move exposes the mover's
//! own king is decided later by [`Player::make_move`](crate::player::Player::make_move).

use std::iter::successors;

use crate::{
    alliance::Alliance,
    board::Board,
    coord::Coord,
    moves::Move,
    piece::{Piece, PieceKind},
    tile::Tile,
};

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

impl Piece {
    /// Every pseudo-legal move of this piece on `board`.
    pub fn calculate_moves<'a>(self, board: &'a Board) -> Box<dyn Iterator<Item = Move> + 'a> {
        match self.kind() {
            PieceKind::Pawn => Box::new(pawn::moves(self, board)),
            PieceKind::Knight => Box::new(knight::moves(self, board)),
            PieceKind::Bishop => Box::new(bishop::moves(self, board)),
            PieceKind::Rook => Box::new(rook::moves(self, board)),
            PieceKind::Queen => Box::new(queen::moves(self, board)),
            PieceKind::King => Box::new(king::moves(self, board)),
        }
    }
}

/// Tiles walked from `position` by repeating `offset` until the board ends.
fn ray(position: Coord, offset: i8) -> impl Iterator<Item = Coord> {
    successors(position.offset(offset), move |position| position.offset(offset))
}

fn move_onto(piece: Piece, destination: Coord, tile: Tile) -> Option<Move> {
    match tile {
        Tile::Empty => Some(Move::quiet(piece, destination)),
        Tile::Occupied(other) if other.alliance() != piece.alliance() => {
            Some(Move::major_capture(piece, destination, other))
        }
        Tile::Occupied(_) => None,
    }
}

fn step_moves<'a>(
    piece: Piece,
    board: &'a Board,
    offsets: &'static [i8],
) -> impl Iterator<Item = Move> + 'a {
    offsets.iter().filter_map(move |offset| {
        let destination = piece.position().offset(*offset)?;
        move_onto(piece, destination, board[destination])
    })
}

fn sliding_moves<'a>(
    piece: Piece,
    board: &'a Board,
    offsets: &'static [i8],
) -> impl Iterator<Item = Move> + 'a {
    offsets.iter().flat_map(move |offset| {
        let mut blocked = false;
        ray(piece.position(), *offset).map_while(move |destination| {
            if blocked {
                return None;
            }
            let tile = board[destination];
            blocked = tile.is_occupied();
            move_onto(piece, destination, tile)
        })
    })
}

/// Whether any piece of `attacker` hits `position`, counting pawn diagonals
/// whether or not something stands there.
pub(crate) fn attacked_by(board: &Board, position: Coord, attacker: Alliance) -> bool {
    let holds = |tile: Option<Coord>, kinds: &[PieceKind]| {
        tile.and_then(|tile| board[tile].piece())
            .is_some_and(|piece| piece.alliance() == attacker && kinds.contains(&piece.kind()))
    };
    let first_piece = |offset: i8| ray(position, offset).find(|tile| board[*tile].is_occupied());

    pawn::ATTACK_OFFSETS.iter().any(|offset| {
        holds(
            position.offset(-offset * attacker.direction()),
            &[PieceKind::Pawn],
        )
    }) || knight::OFFSETS
        .iter()
        .any(|offset| holds(position.offset(*offset), &[PieceKind::Knight]))
        || bishop::OFFSETS.iter().any(|offset| {
            holds(first_piece(*offset), &[PieceKind::Bishop, PieceKind::Queen])
        })
        || rook::OFFSETS
            .iter()
            .any(|offset| holds(first_piece(*offset), &[PieceKind::Rook, PieceKind::Queen]))
        || king::OFFSETS
            .iter()
            .any(|offset| holds(position.offset(*offset), &[PieceKind::King]))
}
