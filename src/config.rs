use core::time::Duration;

/// Side length of the square board.
pub const BOARD_SIZE: u8 = 3;

/// Glyph drawn for player X's marks.
pub const MARK_X: char = 'X';
/// Glyph drawn for player O's marks.
pub const MARK_O: char = 'O';

/// Delay between frames of the winning-line reveal.
pub const WIN_SWEEP_FRAME: Duration = Duration::from_millis(250);
