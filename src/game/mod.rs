//! Core Connect Four game logic: the gravity board with run detection,
//! player types, and the turn-by-turn game session.

mod board;
pub mod lines;
mod player;
mod state;

pub use board::{Board, Cell, DropError, DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_RUN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
