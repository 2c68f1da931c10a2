#![cfg_attr(not(feature = "std"), no_std)]

mod board;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod input;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
mod render;
mod rules;

pub use board::*;
pub use common::*;
pub use config::{BOARD_SIZE, MARK_O, MARK_X};
pub use game::*;
pub use grid::{CellMask, GridError};
#[cfg(feature = "std")]
pub use input::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use render::*;
pub use rules::*;
