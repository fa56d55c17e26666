//! Chess rules: pseudo-legal move generation per piece, move application on
//! immutable boards, and the legality filter that rejects moves leaving the
//! mover's king attacked.
//!
//! ```
//! use chess_rules::{board::Board, coord, transition::MoveStatus};
//!
//! let board = Board::standard();
//! let movement = board.find_move(coord!("e2"), coord!("e4"), None).unwrap();
//! let transition = board.current_player().make_move(movement);
//! assert_eq!(transition.status(), MoveStatus::Done);
//! assert_eq!(board.move_maker(), chess_rules::alliance::Alliance::White);
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod alliance;
pub mod board;
pub mod config;
pub mod coord;
pub mod end_state;
pub mod moves;
pub mod piece;
pub mod pieces;
pub mod player;
pub mod tables;
pub mod tile;
pub mod transition;

/// A [`Coord`](coord::Coord) from a square literal such as `"e4"`, checked
/// at compile time.
#[macro_export]
macro_rules! coord {
    ($square:literal) => {{
        const COORD: $crate::coord::Coord = $crate::coord::Coord::from_literal($square);
        COORD
    }};
}
