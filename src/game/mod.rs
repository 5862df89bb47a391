//! Core horse-race game logic: board geometry, dice arithmetic, the move
//! resolver and the match state machine driven by externally supplied rolls.

mod board;
mod dice;
mod moves;
mod player;
mod state;

pub use board::{
    lane_entrance, start_cell, step, target_after, Board, Square, LANE_LEN, TRACK_LEN, WIN_SLOT,
};
pub use dice::{DiceRoll, Span};
pub use moves::{classify, resolve, Movability};
pub use player::{Color, PlayerKind, HORSES_PER_COLOR, NUM_COLORS, NUM_HORSES};
pub use state::{MatchState, MoveRecord, RollOutcome};
