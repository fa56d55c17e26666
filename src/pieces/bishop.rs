use crate::{board::Board, moves::Move, piece::Piece, pieces::sliding_moves};

pub(super) const OFFSETS: [i8; 4] = [-9, -7, 7, 9];

pub(super) fn moves(bishop: Piece, board: &Board) -> impl Iterator<Item = Move> + '_ {
    sliding_moves(bishop, board, &OFFSETS)
}
