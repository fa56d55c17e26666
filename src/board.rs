use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    ops::Index,
    sync::OnceLock,
};

use crate::{
    alliance::Alliance,
    config::RulesConfig,
    coord::{Coord, NUM_TILES, NUM_TILES_PER_ROW},
    end_state::EndState,
    moves::Move,
    piece::{CastleState, Piece, PieceKind},
    pieces::attacked_by,
    player::{Player, PlayerState},
    tile::Tile,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidBoard {
    NoKing(Alliance),
    MultipleKings(Alliance),
    InvalidEnPassantPawn,
    NonPlayerInCheck,
}
impl Display for InvalidBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InvalidBoard::NoKing(alliance) => write!(f, "no {alliance} king found")?,
            InvalidBoard::MultipleKings(alliance) => {
                write!(f, "found more than 1 {alliance} king")?;
            }
            InvalidBoard::InvalidEnPassantPawn => write!(f, "invalid en passant pawn")?,
            InvalidBoard::NonPlayerInCheck => write!(f, "non-player in check")?,
        }
        Ok(())
    }
}
impl Error for InvalidBoard {}

/// An immutable position: 64 tiles plus whose turn it is. Boards are never
/// changed after construction; every move derives a new one.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Tile; NUM_TILES],
    move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
    transition_move: Option<Move>,
    config: RulesConfig,
    // pseudo-legal moves per alliance, filled on first use
    legal_moves: [OnceLock<Box<[Move]>>; 2],
}
impl Board {
    /// The initial position, White to move.
    pub fn standard() -> Self {
        Board::standard_with(RulesConfig::default())
    }
    pub fn standard_with(config: RulesConfig) -> Self {
        let mut builder = BoardBuilder::new();
        for alliance in Alliance::ALL {
            let (home_row, pawn_row) = match alliance {
                Alliance::White => (7, 6),
                Alliance::Black => (0, 1),
            };
            for (column, kind) in (0..).zip(PieceKind::STARTING_CONFIGURATION) {
                let position = Coord::from_row_column(home_row, column);
                let piece = if kind == PieceKind::King {
                    Piece::king(alliance, position, false, CastleState::CAPABLE)
                } else {
                    Piece::new(kind, alliance, position, false)
                };
                builder.set_piece(piece);
                builder.set_piece(Piece::new(
                    PieceKind::Pawn,
                    alliance,
                    Coord::from_row_column(pawn_row, column),
                    false,
                ));
            }
        }
        builder.config(config).set_move_maker(Alliance::White);
        builder.build_unchecked()
    }
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }
    pub fn tile(&self, position: Coord) -> Tile {
        self.tiles[position.index()]
    }
    pub fn tiles(&self) -> &[Tile; NUM_TILES] {
        &self.tiles
    }
    /// The alliance whose turn it is.
    pub fn move_maker(&self) -> Alliance {
        self.move_maker
    }
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }
    /// The pawn that double-stepped on the move that produced this board.
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }
    /// The move that produced this board, `None` for a built board.
    pub fn transition_move(&self) -> Option<Move> {
        self.transition_move
    }
    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.move_maker)
    }
    pub fn white_player(&self) -> Player<'_> {
        self.player(Alliance::White)
    }
    pub fn black_player(&self) -> Player<'_> {
        self.player(Alliance::Black)
    }
    pub fn all_pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.tiles.iter().copied().filter_map(Tile::piece)
    }
    pub fn active_pieces(&self, alliance: Alliance) -> impl Iterator<Item = Piece> + '_ {
        self.all_pieces()
            .filter(move |piece| piece.alliance() == alliance)
    }
    pub fn king(&self, alliance: Alliance) -> Option<Piece> {
        self.active_pieces(alliance)
            .find(|piece| piece.kind() == PieceKind::King)
    }
    /// Every move the pieces of `alliance` can make, ignoring whether the
    /// move exposes their own king. Computed once per board.
    pub fn legal_moves(&self, alliance: Alliance) -> &[Move] {
        self.legal_moves[alliance.index()].get_or_init(|| {
            let moves: Box<[_]> = self
                .active_pieces(alliance)
                .flat_map(|piece| piece.calculate_moves(self))
                .collect();
            log::trace!("generated {} {alliance} moves", moves.len());
            moves
        })
    }
    pub fn all_legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Alliance::ALL
            .into_iter()
            .flat_map(|alliance| self.legal_moves(alliance).iter().copied())
    }
    /// Whether a piece of `attacker` could capture on `position`. Unlike
    /// [`Board::legal_moves`] this counts pawn diagonals onto empty tiles and
    /// ignores pawn pushes.
    pub fn is_attacked_by(&self, position: Coord, attacker: Alliance) -> bool {
        attacked_by(self, position, attacker)
    }
    /// Looks a move of the side to move up by its squares. `promotion` picks
    /// among promotion moves and falls back to the configured default.
    pub fn find_move(
        &self,
        origin: Coord,
        destination: Coord,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        let promotion = promotion.unwrap_or(self.config.default_promotion());
        self.legal_moves(self.move_maker)
            .iter()
            .copied()
            .find(|movement| {
                movement.origin() == origin
                    && movement.destination() == destination
                    && movement
                        .promotion_kind()
                        .is_none_or(|kind| kind == promotion)
            })
    }
    /// How the game stands for the side to move, `None` while it goes on.
    pub fn end_state(&self) -> Option<EndState> {
        match self.current_player().state() {
            PlayerState::CheckMate => Some(EndState::Win(!self.move_maker)),
            PlayerState::StaleMate => Some(EndState::Draw),
            PlayerState::Normal | PlayerState::InCheck => None,
        }
    }
    pub fn is_end_game(&self) -> bool {
        self.end_state().is_some()
    }
    pub(crate) fn validate_pieces(&self) -> Result<(), InvalidBoard> {
        for alliance in Alliance::ALL {
            if self
                .active_pieces(alliance)
                .filter(|piece| piece.kind() == PieceKind::King)
                .nth(1)
                .is_some()
            {
                return Err(InvalidBoard::MultipleKings(alliance));
            }
        }
        if let Some(pawn) = self.en_passant_pawn {
            let jump_row = match pawn.alliance() {
                Alliance::White => 4,
                Alliance::Black => 3,
            };
            if pawn.kind() != PieceKind::Pawn
                || pawn.alliance() == self.move_maker
                || pawn.position().row() != jump_row
                || self.tile(pawn.position()) != Tile::Occupied(pawn)
            {
                return Err(InvalidBoard::InvalidEnPassantPawn);
            }
        }
        Ok(())
    }
    pub fn validate(&self) -> Result<(), InvalidBoard> {
        for alliance in Alliance::ALL {
            if self.king(alliance).is_none() {
                return Err(InvalidBoard::NoKing(alliance));
            }
        }
        self.validate_pieces()?;
        let opponent_king = self.king(!self.move_maker).map(Piece::position);
        if opponent_king.is_some_and(|king| self.is_attacked_by(king, self.move_maker)) {
            return Err(InvalidBoard::NonPlayerInCheck);
        }
        Ok(())
    }
}
impl Index<Coord> for Board {
    type Output = Tile;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.tiles[index.index()]
    }
}
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
            && self.move_maker == other.move_maker
            && self.en_passant_pawn == other.en_passant_pawn
            && self.transition_move == other.transition_move
            && self.config == other.config
    }
}
impl Eq for Board {}
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(NUM_TILES_PER_ROW) {
            for (i, tile) in row.iter().enumerate() {
                if i != 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile.piece().map_or('-', Piece::fen))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Assembles a board piece by piece. Used to set up arbitrary positions.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    tiles: [Tile; NUM_TILES],
    move_maker: Alliance,
    en_passant_pawn: Option<Piece>,
    transition_move: Option<Move>,
    config: RulesConfig,
}
impl BoardBuilder {
    pub fn new() -> Self {
        BoardBuilder {
            tiles: [Tile::Empty; NUM_TILES],
            move_maker: Alliance::White,
            en_passant_pawn: None,
            transition_move: None,
            config: RulesConfig::default(),
        }
    }
    /// Starts from the pieces and config of `board`; turn, en passant pawn
    /// and transition move are reset.
    pub(crate) fn from_board(board: &Board) -> Self {
        BoardBuilder {
            tiles: board.tiles,
            config: board.config,
            ..BoardBuilder::new()
        }
    }
    /// Places `piece` on its own position, replacing whatever stood there.
    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        self.tiles[piece.position().index()] = Tile::Occupied(piece);
        self
    }
    pub fn clear(&mut self, position: Coord) -> &mut Self {
        self.tiles[position.index()] = Tile::Empty;
        self
    }
    pub fn set_move_maker(&mut self, alliance: Alliance) -> &mut Self {
        self.move_maker = alliance;
        self
    }
    pub fn set_en_passant_pawn(&mut self, pawn: Piece) -> &mut Self {
        self.en_passant_pawn = Some(pawn);
        self
    }
    pub(crate) fn set_transition_move(&mut self, movement: Move) -> &mut Self {
        self.transition_move = Some(movement);
        self
    }
    pub fn config(&mut self, config: RulesConfig) -> &mut Self {
        self.config = config;
        self
    }
    /// # Errors
    /// Returns an error when the position is not one the rules engine can
    /// play from: a side without exactly one king, an en passant pawn that
    /// is not a just-jumped enemy pawn, or the side not to move in check.
    pub fn build(&self) -> Result<Board, InvalidBoard> {
        let board = self.build_unchecked();
        board.validate()?;
        Ok(board)
    }
    pub(crate) fn build_unchecked(&self) -> Board {
        Board {
            tiles: self.tiles,
            move_maker: self.move_maker,
            en_passant_pawn: self.en_passant_pawn,
            transition_move: self.transition_move,
            config: self.config,
            legal_moves: [OnceLock::new(), OnceLock::new()],
        }
    }
}
impl Default for BoardBuilder {
    fn default() -> Self {
        BoardBuilder::new()
    }
}

/// Builds a position out of entries such as `"Ke1"` or `"pd7"`, uppercase
/// for White. Pawns on their start rank, kings and rooks count as unmoved;
/// an unmoved king on its home square may castle both ways.
#[cfg(test)]
pub(crate) fn setup(pieces: &[&str]) -> BoardBuilder {
    let mut builder = BoardBuilder::new();
    for entry in pieces {
        let mut characters = entry.chars();
        let symbol = characters.next().unwrap();
        let kind = PieceKind::try_from(symbol).unwrap();
        let alliance = if symbol.is_ascii_uppercase() {
            Alliance::White
        } else {
            Alliance::Black
        };
        let position: Coord = characters.as_str().parse().unwrap();
        let piece = match kind {
            PieceKind::King => {
                let home = Coord::from_row_column(alliance.home_row(), 4);
                if position == home {
                    Piece::king(alliance, position, false, CastleState::CAPABLE)
                } else {
                    Piece::king(alliance, position, true, CastleState::default())
                }
            }
            PieceKind::Pawn => Piece::new(
                kind,
                alliance,
                position,
                !alliance.is_pawn_start_square(position),
            ),
            PieceKind::Rook => Piece::new(kind, alliance, position, false),
            _ => Piece::new(kind, alliance, position, true),
        };
        builder.set_piece(piece);
    }
    builder
}
