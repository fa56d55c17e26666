use crate::{board::Board, moves::Move, piece::Piece, pieces::sliding_moves};

pub(super) const OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub(super) fn moves(queen: Piece, board: &Board) -> impl Iterator<Item = Move> + '_ {
    sliding_moves(queen, board, &OFFSETS)
}
