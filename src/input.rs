#![cfg(feature = "std")]

//! Coordinate parsing and the interactive move prompt.

use std::io::{self, Write};

use crate::board::{Board, Player};
use crate::config::BOARD_SIZE;

/// A command read from the player at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Play the cell at (row, col).
    Cell(usize, usize),
    /// Leave the game.
    Quit,
}

/// Format (row, col) as a board coordinate, e.g. `B2`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

/// Parse a `B2`-style coordinate into (row, col).
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., B2)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-C", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-C", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-3", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-3".to_string());
    }
    if row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-3", row));
    }
    Ok((row - 1, col))
}

/// Prompt `player` for a move until they name a free cell or quit.
///
/// Parse errors and occupied cells re-prompt with a message; `q` (or EOF on
/// stdin) quits.
pub fn prompt_move(player: Player, board: &Board) -> io::Result<PlayerCommand> {
    let stdin = io::stdin();
    loop {
        print!("\nPlayer {} - enter a cell (e.g. B2, 'q' to quit): ", player);
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            return Ok(PlayerCommand::Quit);
        }
        let line = line.trim();

        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(PlayerCommand::Quit);
        }

        let (row, col) = match parse_coord(line) {
            Ok(coord) => coord,
            Err(e) => {
                println!("✗ {}", e);
                println!("   Example: A1, B2, C3");
                continue;
            }
        };

        match board.get(row, col) {
            Ok(cell) if cell.is_empty() => return Ok(PlayerCommand::Cell(row, col)),
            Ok(_) => {
                println!(
                    "✗ {} is already taken - choose another cell.",
                    coord_to_string(row, col)
                );
            }
            Err(e) => println!("✗ {}", e),
        }
    }
}
