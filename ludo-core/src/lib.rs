//! Game model for a Ludo board: a 15x15 grid of colored cells, four piece
//! sets, a shared traversal path, and dice-driven turn rotation.
//!
//! This crate is pure state: no drawing, no file I/O. Rendering consumes
//! [`BoardSnapshot`] values produced by [`Game::snapshot`].

pub mod board;
pub mod error;
pub mod game;
pub mod path;

pub use board::{Cell, Color, BOARD_SIZE, CELL_COUNT, cell_col, cell_row, color_of};
pub use error::GameError;
pub use game::{BoardSnapshot, Capture, Game, MoveOutcome, PLAYER_ORDER, Piece, PieceSnapshot};
pub use path::{PATH_ORDER, advance};
