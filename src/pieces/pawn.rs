use crate::{
    board::Board,
    coord::Coord,
    moves::Move,
    piece::{Piece, PieceKind},
};

/// Diagonal offsets, to be multiplied by the pawn's direction.
pub(super) const ATTACK_OFFSETS: [i8; 2] = [7, 9];
const ADVANCE_OFFSET: i8 = 8;

// moves onto the last rank turn into one move per configured promotion kind
fn promote_or<'a>(
    pawn: Piece,
    board: &'a Board,
    destination: Coord,
    captured: Option<Piece>,
    plain: Move,
) -> impl Iterator<Item = Move> + 'a {
    let promoting = pawn.alliance().is_pawn_promotion_square(destination);
    let choices: &[PieceKind] = if promoting {
        board.config().promotion_choices()
    } else {
        &[]
    };
    choices
        .iter()
        .map(move |kind| Move::promotion(pawn, destination, captured, *kind))
        .chain((!promoting).then_some(plain))
}

pub(super) fn moves(pawn: Piece, board: &Board) -> impl Iterator<Item = Move> + '_ {
    let alliance = pawn.alliance();
    let step = ADVANCE_OFFSET * alliance.direction();

    let advance = pawn
        .position()
        .offset(step)
        .filter(|destination| !board[*destination].is_occupied());
    let jump = advance
        .filter(|_| pawn.is_first_move() && alliance.is_pawn_start_square(pawn.position()))
        .and_then(|over| over.offset(step))
        .filter(|destination| !board[*destination].is_occupied())
        .map(|destination| Move::pawn_jump(pawn, destination));

    let captures = ATTACK_OFFSETS
        .iter()
        .filter_map(move |offset| pawn.position().offset(offset * alliance.direction()))
        .flat_map(move |destination| {
            board[destination]
                .piece()
                .filter(|piece| piece.alliance() != alliance)
                .into_iter()
                .flat_map(move |piece| {
                    let capture = Move::pawn_capture(pawn, destination, piece);
                    promote_or(pawn, board, destination, Some(piece), capture)
                })
                .chain(en_passant(pawn, board, destination))
        });

    advance
        .into_iter()
        .flat_map(move |destination| {
            promote_or(pawn, board, destination, None, Move::quiet(pawn, destination))
        })
        .chain(jump)
        .chain(captures)
}

// the pawn that just jumped stands beside us, right behind `destination`
fn en_passant(pawn: Piece, board: &Board, destination: Coord) -> Option<Move> {
    let passed = board.en_passant_pawn()?;
    let behind = destination.offset(ADVANCE_OFFSET * pawn.alliance().opposite_direction())?;
    (passed.alliance() != pawn.alliance()
        && passed.position() == behind
        && !board[destination].is_occupied())
    .then(|| Move::en_passant(pawn, destination, passed))
}
