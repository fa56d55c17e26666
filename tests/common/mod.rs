//! Position setup shared by the integration tests. Positions are written as
//! the first four fields of a FEN record.

use std::fmt::Write;

use chess_rules::{
    alliance::Alliance,
    board::{Board, BoardBuilder},
    coord::Coord,
    piece::{CastleState, Piece, PieceKind},
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// # Panics
/// Panics on anything but a well formed position.
pub fn from_fen(position: &str) -> Board {
    let mut fields = position.split_whitespace();
    let placement = fields.next().unwrap();
    let move_maker: Alliance = fields.next().unwrap().parse().unwrap();
    let castling = fields.next().unwrap_or("-");
    let en_passant = fields.next().unwrap_or("-");

    let mut builder = BoardBuilder::new();
    for (row, rank) in (0..).zip(placement.split('/')) {
        let mut column = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                column += u8::try_from(skip).unwrap();
                continue;
            }
            let kind = PieceKind::try_from(c).unwrap();
            let alliance = if c.is_ascii_uppercase() {
                Alliance::White
            } else {
                Alliance::Black
            };
            let position = Coord::from_row_column(row, column);
            builder.set_piece(piece(kind, alliance, position, castling));
            column += 1;
        }
        assert_eq!(column, 8, "rank {rank} is not 8 tiles wide");
    }
    builder.set_move_maker(move_maker);
    if en_passant != "-" {
        let target: Coord = en_passant.parse().unwrap();
        let jumped = target
            .offset(8 * (!move_maker).direction())
            .expect("en passant target next to the jumped pawn");
        builder.set_en_passant_pawn(
            Piece::new(PieceKind::Pawn, !move_maker, jumped, true),
        );
    }
    builder.build().unwrap()
}

fn piece(kind: PieceKind, alliance: Alliance, position: Coord, castling: &str) -> Piece {
    let (king_side, queen_side) = match alliance {
        Alliance::White => ('K', 'Q'),
        Alliance::Black => ('k', 'q'),
    };
    let home_row = alliance.home_row();
    match kind {
        PieceKind::King => {
            let castle = CastleState {
                is_castled: false,
                king_side_capable: castling.contains(king_side),
                queen_side_capable: castling.contains(queen_side),
            };
            let unmoved = position == Coord::from_row_column(home_row, 4)
                && (castle.king_side_capable || castle.queen_side_capable);
            Piece::king(alliance, position, !unmoved, castle)
        }
        PieceKind::Rook => {
            let unmoved = (position == Coord::from_row_column(home_row, 7)
                && castling.contains(king_side))
                || (position == Coord::from_row_column(home_row, 0)
                    && castling.contains(queen_side));
            Piece::new(kind, alliance, position, !unmoved)
        }
        PieceKind::Pawn => Piece::new(
            kind,
            alliance,
            position,
            !alliance.is_pawn_start_square(position),
        ),
        _ => Piece::new(kind, alliance, position, true),
    }
}

/// The position as a full FEN record, for handing to other move generators.
#[allow(dead_code)]
pub fn fen(board: &Board) -> String {
    let mut fen = String::new();
    for (row, tiles) in board.tiles().chunks(8).enumerate() {
        if row != 0 {
            fen.push('/');
        }
        let mut empty = 0;
        for tile in tiles {
            match tile.piece() {
                Some(piece) => {
                    if empty != 0 {
                        write!(fen, "{empty}").unwrap();
                        empty = 0;
                    }
                    fen.push(piece.fen());
                }
                None => empty += 1,
            }
        }
        if empty != 0 {
            write!(fen, "{empty}").unwrap();
        }
    }
    write!(fen, " {} ", board.move_maker().lowercase()).unwrap();

    let mut castling = String::new();
    for alliance in Alliance::ALL {
        let Some(king) = board.king(alliance) else {
            continue;
        };
        let home_row = alliance.home_row();
        let rook_ready = |column| {
            board[Coord::from_row_column(home_row, column)]
                .piece()
                .is_some_and(|rook| {
                    rook.kind() == PieceKind::Rook
                        && rook.alliance() == alliance
                        && rook.is_first_move()
                })
        };
        let king_ready =
            king.is_first_move() && king.position() == Coord::from_row_column(home_row, 4);
        let (king_side, queen_side) = match alliance {
            Alliance::White => ('K', 'Q'),
            Alliance::Black => ('k', 'q'),
        };
        if king_ready && king.is_king_side_castle_capable() && rook_ready(7) {
            castling.push(king_side);
        }
        if king_ready && king.is_queen_side_castle_capable() && rook_ready(0) {
            castling.push(queen_side);
        }
    }
    if castling.is_empty() {
        castling.push('-');
    }
    fen.push_str(&castling);

    match board.en_passant_pawn() {
        Some(pawn) => {
            let target = pawn
                .position()
                .offset(8 * pawn.alliance().opposite_direction())
                .unwrap();
            write!(fen, " {target}").unwrap();
        }
        None => fen.push_str(" -"),
    }
    fen.push_str(" 0 1");
    fen
}
