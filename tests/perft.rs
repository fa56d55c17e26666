mod common;

use chess_rules::board::Board;

use crate::common::{from_fen, init_logger};

fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let player = board.current_player();
    player
        .legal_moves()
        .iter()
        .filter_map(|movement| player.make_move(*movement).into_result().ok())
        .map(|next| perft(&next, depth - 1))
        .sum()
}

#[test]
fn starting_position() {
    init_logger();
    let board = Board::standard();
    assert_eq!(perft(&board, 1), 20);
    assert_eq!(perft(&board, 2), 400);
    assert_eq!(perft(&board, 3), 8902);
}
#[test]
fn kiwipete() {
    init_logger();
    let board = from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -");
    assert_eq!(perft(&board, 1), 48);
    assert_eq!(perft(&board, 2), 2039);
}
#[test]
fn rook_endgame() {
    init_logger();
    let board = from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -");
    assert_eq!(perft(&board, 1), 14);
    assert_eq!(perft(&board, 2), 191);
    assert_eq!(perft(&board, 3), 2812);
}
#[test]
fn promotions_and_pins() {
    init_logger();
    let board = from_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq -");
    assert_eq!(perft(&board, 1), 6);
    assert_eq!(perft(&board, 2), 264);
}
#[test]
fn single_promotion_kind() {
    use chess_rules::{config::RulesConfig, piece::PieceKind};

    init_logger();
    let board = from_fen("8/P6k/8/8/8/8/8/K7 w - -");
    assert_eq!(perft(&board, 1), 7);
    let mut builder = chess_rules::board::BoardBuilder::new();
    for piece in board.all_pieces() {
        builder.set_piece(piece);
    }
    let board = builder
        .config(RulesConfig::auto_promote(PieceKind::Queen))
        .build()
        .unwrap();
    assert_eq!(perft(&board, 1), 4);
}
