//! Commonly used types and utilities for ease of import.

pub use crate::{evaluate, Board, BoardError, Cell, Game, Outcome, PlayOutcome, Player, LINES};

#[cfg(feature = "std")]
pub use crate::{
    announce_win, init_logging, parse_coord, print_board, prompt_move, PlayerCommand,
};
