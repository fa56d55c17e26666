use crate::{board::Board, moves::Move, piece::Piece, pieces::step_moves};

pub(super) const OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub(super) fn moves(knight: Piece, board: &Board) -> impl Iterator<Item = Move> + '_ {
    step_moves(knight, board, &OFFSETS)
}

#[cfg(test)]
mod test {
    use crate::{board::setup, coord, moves::MoveKind};

    #[test]
    fn center() {
        let board = setup(&["Ke1", "ke8", "Nd4"]).build().unwrap();
        let knight = board[coord!("d4")].piece().unwrap();
        assert_eq!(knight.calculate_moves(&board).count(), 8);
    }
    #[test]
    fn corners_do_not_wrap() {
        let board = setup(&["Ke1", "ke8", "Na1", "Nh4"]).build().unwrap();
        let mut destinations: Vec<_> = board[coord!("a1")]
            .piece()
            .unwrap()
            .calculate_moves(&board)
            .map(|movement| movement.destination())
            .collect();
        destinations.sort();
        assert_eq!(destinations, [coord!("b3"), coord!("c2")]);

        let count = board[coord!("h4")]
            .piece()
            .unwrap()
            .calculate_moves(&board)
            .count();
        assert_eq!(count, 4);
    }
    #[test]
    fn captures_enemies_only() {
        let board = setup(&["Ke1", "ke8", "Nb1", "Pd2", "pc3"]).build().unwrap();
        let moves: Vec<_> = board[coord!("b1")]
            .piece()
            .unwrap()
            .calculate_moves(&board)
            .collect();
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|movement| movement.destination() != coord!("d2")));
        let capture = moves
            .iter()
            .find(|movement| movement.destination() == coord!("c3"))
            .unwrap();
        assert_eq!(capture.kind(), MoveKind::MajorCapture);
        assert_eq!(
            capture.captured_piece(),
            board[coord!("c3")].piece()
        );
    }
}
