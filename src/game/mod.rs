//! Core Reversi game logic: board representation, player types, capture
//! rules, and the game state machine with checked transitions.

mod board;
mod player;
pub mod rules;
mod state;

pub use board::{
    location_to_move, move_to_location, Board, Cell, Score, ACTION_SPACE, EDGE, NUM_CELLS,
    PASS_INDEX,
};
pub use player::Player;
pub use state::{Action, GameOutcome, GameState, MoveError};
