//! Core tic-tac-toe game logic: board representation, player marks, and game
//! state with a pure outcome query.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, CELLS, LINES, SIDE};
pub use player::Player;
pub use state::{GameState, MoveError, Outcome};
