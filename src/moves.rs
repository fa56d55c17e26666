use std::fmt::{self, Display, Formatter};

use crate::{
    board::{Board, BoardBuilder},
    coord::Coord,
    piece::{Piece, PieceKind},
};

/// The rook half of a castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRook {
    pub rook: Piece,
    pub destination: Coord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    MajorCapture,
    PawnJump,
    PawnCapture,
    EnPassantCapture,
    Promotion(PieceKind),
    CastleKingSide(CastleRook),
    CastleQueenSide(CastleRook),
}

/// A transition a piece can make. Moves only describe; [`Move::apply`]
/// computes the board they lead to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    kind: MoveKind,
    moved_piece: Piece,
    destination: Coord,
    captured_piece: Option<Piece>,
}
impl Move {
    pub fn quiet(piece: Piece, destination: Coord) -> Self {
        Move {
            kind: MoveKind::Quiet,
            moved_piece: piece,
            destination,
            captured_piece: None,
        }
    }
    pub fn major_capture(piece: Piece, destination: Coord, captured: Piece) -> Self {
        Move {
            kind: MoveKind::MajorCapture,
            moved_piece: piece,
            destination,
            captured_piece: Some(captured),
        }
    }
    pub fn pawn_jump(pawn: Piece, destination: Coord) -> Self {
        Move {
            kind: MoveKind::PawnJump,
            moved_piece: pawn,
            destination,
            captured_piece: None,
        }
    }
    pub fn pawn_capture(pawn: Piece, destination: Coord, captured: Piece) -> Self {
        Move {
            kind: MoveKind::PawnCapture,
            moved_piece: pawn,
            destination,
            captured_piece: Some(captured),
        }
    }
    /// `captured` stands beside the pawn, not on `destination`.
    pub fn en_passant(pawn: Piece, destination: Coord, captured: Piece) -> Self {
        Move {
            kind: MoveKind::EnPassantCapture,
            moved_piece: pawn,
            destination,
            captured_piece: Some(captured),
        }
    }
    pub fn promotion(
        pawn: Piece,
        destination: Coord,
        captured: Option<Piece>,
        into: PieceKind,
    ) -> Self {
        debug_assert!(into.is_promotion_choice());
        Move {
            kind: MoveKind::Promotion(into),
            moved_piece: pawn,
            destination,
            captured_piece: captured,
        }
    }
    pub fn castle_king_side(king: Piece, destination: Coord, rook: CastleRook) -> Self {
        Move {
            kind: MoveKind::CastleKingSide(rook),
            moved_piece: king,
            destination,
            captured_piece: None,
        }
    }
    pub fn castle_queen_side(king: Piece, destination: Coord, rook: CastleRook) -> Self {
        Move {
            kind: MoveKind::CastleQueenSide(rook),
            moved_piece: king,
            destination,
            captured_piece: None,
        }
    }
    pub fn kind(self) -> MoveKind {
        self.kind
    }
    pub fn moved_piece(self) -> Piece {
        self.moved_piece
    }
    pub fn origin(self) -> Coord {
        self.moved_piece.position()
    }
    pub fn destination(self) -> Coord {
        self.destination
    }
    pub fn captured_piece(self) -> Option<Piece> {
        self.captured_piece
    }
    pub fn is_capture(self) -> bool {
        self.captured_piece.is_some()
    }
    pub fn is_castling(self) -> bool {
        matches!(
            self.kind,
            MoveKind::CastleKingSide(_) | MoveKind::CastleQueenSide(_)
        )
    }
    pub fn castle_rook(self) -> Option<CastleRook> {
        match self.kind {
            MoveKind::CastleKingSide(rook) | MoveKind::CastleQueenSide(rook) => Some(rook),
            _ => None,
        }
    }
    pub fn promotion_kind(self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion(kind) => Some(kind),
            _ => None,
        }
    }
    /// The board after this move. `board` is left as it is and legality is
    /// not checked; that is [`Player::make_move`](crate::player::Player::make_move)'s job.
    ///
    /// # Panics
    /// In debug builds, panics if the move does not fit `board` well enough to
    /// produce a sound position (a second king, a stray en passant pawn).
    pub fn apply(&self, board: &Board) -> Board {
        let mut builder = BoardBuilder::from_board(board);
        builder.clear(self.origin());
        if let Some(captured) = self.captured_piece {
            builder.clear(captured.position());
        }
        match self.kind {
            MoveKind::Quiet
            | MoveKind::MajorCapture
            | MoveKind::PawnCapture
            | MoveKind::EnPassantCapture => {
                builder.set_piece(self.moved_piece.moved_to(self.destination, false));
            }
            MoveKind::PawnJump => {
                let pawn = self.moved_piece.moved_to(self.destination, false);
                builder.set_piece(pawn).set_en_passant_pawn(pawn);
            }
            MoveKind::Promotion(kind) => {
                builder.set_piece(self.moved_piece.promoted_to(kind, self.destination));
            }
            MoveKind::CastleKingSide(castle) | MoveKind::CastleQueenSide(castle) => {
                builder
                    .clear(castle.rook.position())
                    .set_piece(self.moved_piece.moved_to(self.destination, true))
                    .set_piece(castle.rook.moved_to(castle.destination, false));
            }
        }
        builder
            .set_move_maker(!self.moved_piece.alliance())
            .set_transition_move(*self);
        let board = builder.build_unchecked();
        if cfg!(debug_assertions)
            && let Err(err) = board.validate_pieces()
        {
            panic!("{self} produced an unsound board: {err}");
        }
        board
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.destination)?;
        if let Some(kind) = self.promotion_kind() {
            write!(f, "{}", kind.lowercase())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        alliance::Alliance,
        board::{Board, BoardBuilder},
        coord,
        moves::{CastleRook, Move},
        piece::{CastleState, Piece, PieceKind},
        tile::Tile,
    };

    fn kings() -> BoardBuilder {
        let mut builder = BoardBuilder::new();
        builder
            .set_piece(Piece::king(
                Alliance::White,
                coord!("e1"),
                false,
                CastleState::CAPABLE,
            ))
            .set_piece(Piece::king(
                Alliance::Black,
                coord!("e8"),
                false,
                CastleState::CAPABLE,
            ));
        builder
    }

    #[test]
    fn quiet_move_relocates_piece() {
        let board = Board::standard();
        let knight = board[coord!("g1")].piece().unwrap();
        let movement = Move::quiet(knight, coord!("f3"));
        let next = movement.apply(&board);

        assert_eq!(next[coord!("g1")], Tile::Empty);
        let moved = next[coord!("f3")].piece().unwrap();
        assert_eq!(moved.position(), coord!("f3"));
        assert!(moved.has_moved());
        assert_eq!(next.move_maker(), Alliance::Black);
        assert_eq!(next.transition_move(), Some(movement));
        assert_eq!(next.en_passant_pawn(), None);

        // the source board is untouched
        assert_eq!(board[coord!("g1")].piece(), Some(knight));
        assert_eq!(board.move_maker(), Alliance::White);
    }
    #[test]
    fn pawn_jump_marks_en_passant_pawn() {
        let board = Board::standard();
        let pawn = board[coord!("e2")].piece().unwrap();
        let next = Move::pawn_jump(pawn, coord!("e4")).apply(&board);
        let jumped = next[coord!("e4")].piece().unwrap();
        assert_eq!(next.en_passant_pawn(), Some(jumped));

        let reply = next[coord!("g8")].piece().unwrap();
        let after = Move::quiet(reply, coord!("f6")).apply(&next);
        assert_eq!(after.en_passant_pawn(), None);
    }
    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let white = Piece::new(PieceKind::Pawn, Alliance::White, coord!("e5"), true);
        let black = Piece::new(PieceKind::Pawn, Alliance::Black, coord!("d5"), true);
        let board = kings()
            .set_piece(white)
            .set_piece(black)
            .set_en_passant_pawn(black)
            .build()
            .unwrap();
        let next = Move::en_passant(white, coord!("d6"), black).apply(&board);
        assert_eq!(next[coord!("d5")], Tile::Empty);
        assert_eq!(next[coord!("e5")], Tile::Empty);
        assert_eq!(
            next[coord!("d6")].piece().map(Piece::kind),
            Some(PieceKind::Pawn)
        );
        assert_eq!(next.active_pieces(Alliance::Black).count(), 1);
    }
    #[test]
    fn castling_moves_both_pieces() {
        let king = Piece::king(Alliance::White, coord!("e1"), false, CastleState::CAPABLE);
        let rook = Piece::new(PieceKind::Rook, Alliance::White, coord!("h1"), false);
        let board = kings().set_piece(rook).build().unwrap();
        let movement = Move::castle_king_side(
            king,
            coord!("g1"),
            CastleRook {
                rook,
                destination: coord!("f1"),
            },
        );
        let next = movement.apply(&board);
        let king = next[coord!("g1")].piece().unwrap();
        let rook = next[coord!("f1")].piece().unwrap();
        assert!(king.is_castled());
        assert!(king.has_moved());
        assert!(rook.has_moved());
        assert_eq!(next[coord!("e1")], Tile::Empty);
        assert_eq!(next[coord!("h1")], Tile::Empty);
    }
    #[test]
    fn promotion_replaces_pawn() {
        let pawn = Piece::new(PieceKind::Pawn, Alliance::White, coord!("a7"), true);
        let victim = Piece::new(PieceKind::Rook, Alliance::Black, coord!("b8"), false);
        let board = kings().set_piece(pawn).set_piece(victim).build().unwrap();
        let next =
            Move::promotion(pawn, coord!("b8"), Some(victim), PieceKind::Knight).apply(&board);
        let knight = next[coord!("b8")].piece().unwrap();
        assert_eq!(knight.kind(), PieceKind::Knight);
        assert_eq!(knight.alliance(), Alliance::White);
        assert_eq!(next[coord!("a7")], Tile::Empty);
        assert_eq!(next.active_pieces(Alliance::Black).count(), 1);
    }
    #[test]
    fn display() {
        let pawn = Piece::new(PieceKind::Pawn, Alliance::White, coord!("a7"), true);
        assert_eq!(
            Move::promotion(pawn, coord!("a8"), None, PieceKind::Queen).to_string(),
            "a7a8q"
        );
        assert_eq!(Move::quiet(pawn, coord!("a8")).to_string(), "a7a8");
    }
}
