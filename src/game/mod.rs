//! Core Tic-Tac-Toe game logic: board representation, player types, and
//! immutable position transitions with terminal-outcome evaluation.

mod board;
mod player;
mod state;

pub use board::{Cell, Position, SIZE};
pub use player::Player;
pub use state::{GameOutcome, Move, MoveError};
