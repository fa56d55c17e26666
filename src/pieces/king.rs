use crate::{
    board::Board,
    coord::Coord,
    moves::{CastleRook, Move},
    piece::{Piece, PieceKind},
    pieces::step_moves,
};

pub(super) const OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

const KING_COLUMN: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    King,
    Queen,
}
impl Side {
    fn rook_column(self) -> u8 {
        match self {
            Side::King => 7,
            Side::Queen => 0,
        }
    }
    fn must_be_empty(self) -> &'static [u8] {
        match self {
            Side::King => &[5, 6],
            Side::Queen => &[1, 2, 3],
        }
    }
    // the king's start tile is checked separately
    fn must_be_safe(self) -> [u8; 2] {
        match self {
            Side::King => [5, 6],
            Side::Queen => [3, 2],
        }
    }
    fn king_destination(self) -> u8 {
        match self {
            Side::King => 6,
            Side::Queen => 2,
        }
    }
    fn rook_destination(self) -> u8 {
        match self {
            Side::King => 5,
            Side::Queen => 3,
        }
    }
}

pub(super) fn moves(king: Piece, board: &Board) -> impl Iterator<Item = Move> + '_ {
    let can_castle = king.is_first_move()
        && king.position() == Coord::from_row_column(king.alliance().home_row(), KING_COLUMN)
        && !board.is_attacked_by(king.position(), !king.alliance());
    step_moves(king, board, &OFFSETS).chain(
        [Side::King, Side::Queen]
            .into_iter()
            .filter(move |_| can_castle)
            .filter_map(move |side| castle(king, board, side)),
    )
}

fn castle(king: Piece, board: &Board, side: Side) -> Option<Move> {
    let capable = match side {
        Side::King => king.is_king_side_castle_capable(),
        Side::Queen => king.is_queen_side_castle_capable(),
    };
    if !capable {
        return None;
    }
    let row = king.alliance().home_row();
    let rook = board[Coord::from_row_column(row, side.rook_column())]
        .piece()
        .filter(|rook| {
            rook.kind() == PieceKind::Rook
                && rook.alliance() == king.alliance()
                && rook.is_first_move()
        })?;
    if side
        .must_be_empty()
        .iter()
        .any(|column| board[Coord::from_row_column(row, *column)].is_occupied())
    {
        return None;
    }
    if side.must_be_safe().into_iter().any(|column| {
        board.is_attacked_by(Coord::from_row_column(row, column), !king.alliance())
    }) {
        return None;
    }
    let castle_rook = CastleRook {
        rook,
        destination: Coord::from_row_column(row, side.rook_destination()),
    };
    let destination = Coord::from_row_column(row, side.king_destination());
    let movement = match side {
        Side::King => Move::castle_king_side(king, destination, castle_rook),
        Side::Queen => Move::castle_queen_side(king, destination, castle_rook),
    };
    Some(movement)
}

#[cfg(test)]
mod test {
    use crate::{
        alliance::Alliance,
        board::{Board, setup},
        coord,
        coord::Coord,
        moves::{Move, MoveKind},
        piece::{CastleState, Piece, PieceKind},
    };

    fn castles(board: &Board, king: &str) -> Vec<Move> {
        let king = board[king.parse::<Coord>().unwrap()].piece().unwrap();
        king.calculate_moves(board)
            .filter(|movement| movement.is_castling())
            .collect()
    }

    #[test]
    fn steps_stay_on_board() {
        let board = setup(&["Kh1", "ka8"]).build().unwrap();
        let king = board[coord!("h1")].piece().unwrap();
        let mut destinations: Vec<_> = king
            .calculate_moves(&board)
            .map(|movement| movement.destination())
            .collect();
        destinations.sort();
        assert_eq!(destinations, [coord!("g2"), coord!("h2"), coord!("g1")]);
    }
    #[test]
    fn both_sides() {
        let board = setup(&["Ke1", "Ra1", "Rh1", "ke8", "ra8", "rh8"])
            .build()
            .unwrap();
        let white = castles(&board, "e1");
        assert_eq!(white.len(), 2);
        let king_side = white
            .iter()
            .find(|movement| matches!(movement.kind(), MoveKind::CastleKingSide(_)))
            .unwrap();
        assert_eq!(king_side.destination(), coord!("g1"));
        let rook = king_side.castle_rook().unwrap();
        assert_eq!(rook.rook.position(), coord!("h1"));
        assert_eq!(rook.destination, coord!("f1"));

        let queen_side = white
            .iter()
            .find(|movement| matches!(movement.kind(), MoveKind::CastleQueenSide(_)))
            .unwrap();
        assert_eq!(queen_side.destination(), coord!("c1"));
        assert_eq!(queen_side.castle_rook().unwrap().destination, coord!("d1"));

        assert_eq!(castles(&board, "e8").len(), 2);
    }
    #[test]
    fn blocked_path() {
        let board = setup(&["Ke1", "Ra1", "Nb1", "Rh1", "Bf1", "ke8"])
            .build()
            .unwrap();
        assert!(castles(&board, "e1").is_empty());
    }
    #[test]
    fn attacked_path() {
        // f1 is covered, b1 does not matter
        let board = setup(&["Ke1", "Ra1", "Rh1", "ke8", "rf8", "rb8"])
            .build()
            .unwrap();
        let moves = castles(&board, "e1");
        assert_eq!(moves.len(), 1);
        assert!(matches!(moves[0].kind(), MoveKind::CastleQueenSide(_)));

        let board = setup(&["Ke1", "Ra1", "Rh1", "ke8", "re7"])
            .set_move_maker(Alliance::White)
            .build()
            .unwrap();
        assert!(castles(&board, "e1").is_empty());
    }
    #[test]
    fn needs_unmoved_pieces_and_capability() {
        let moved_rook = Piece::new(PieceKind::Rook, Alliance::White, coord!("h1"), true);
        let board = setup(&["Ke1", "Ra1", "ke8"])
            .set_piece(moved_rook)
            .build()
            .unwrap();
        let moves = castles(&board, "e1");
        assert_eq!(moves.len(), 1);
        assert!(matches!(moves[0].kind(), MoveKind::CastleQueenSide(_)));

        let king = Piece::king(
            Alliance::White,
            coord!("e1"),
            false,
            CastleState {
                is_castled: false,
                king_side_capable: true,
                queen_side_capable: false,
            },
        );
        let board = setup(&["Ra1", "Rh1", "ke8"]).set_piece(king).build().unwrap();
        let moves = castles(&board, "e1");
        assert_eq!(moves.len(), 1);
        assert!(matches!(moves[0].kind(), MoveKind::CastleKingSide(_)));
    }
}
