use crate::{board::Board, moves::Move, piece::Piece, pieces::sliding_moves};

pub(super) const OFFSETS: [i8; 4] = [-8, -1, 1, 8];

pub(super) fn moves(rook: Piece, board: &Board) -> impl Iterator<Item = Move> + '_ {
    sliding_moves(rook, board, &OFFSETS)
}
