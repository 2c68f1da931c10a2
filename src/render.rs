#![cfg(feature = "std")]

//! Terminal rendering of the board and the winning-line reveal.

use crate::board::{Board, Cell};
use crate::config::{BOARD_SIZE, WIN_SWEEP_FRAME};
use crate::rules::Line;

/// Print the board with column letters and row numbers.
pub fn print_board(board: &Board) {
    print_frame(board, None);
}

fn print_frame(board: &Board, highlight: Option<(&Line, usize)>) {
    let n = BOARD_SIZE as usize;
    print!("      ");
    for c in 0..n {
        let ch = (b'A' + c as u8) as char;
        print!(" {} ", ch);
    }
    println!();
    println!("    ╔{}╗", "═".repeat(n * 3 + 2));
    for r in 0..n {
        print!("  {} ║ ", r + 1);
        for c in 0..n {
            let glyph = match board.get(r, c) {
                Ok(Cell::Marked(player)) => player.glyph(),
                _ => '.',
            };
            let lit = match highlight {
                Some((line, revealed)) => line.cells()[..revealed].contains(&(r, c)),
                None => false,
            };
            if lit {
                print!("[{}]", glyph);
            } else {
                print!(" {} ", glyph);
            }
        }
        println!(" ║");
    }
    println!("    ╚{}╝", "═".repeat(n * 3 + 2));
}

/// Reveal the winning line cell by cell, one frame per cell.
///
/// The sweep is a cooperative single-threaded render loop: each frame is
/// printed and the task sleeps until the next one. With `animate` off only
/// the final, fully highlighted frame is shown.
pub async fn announce_win(board: &Board, line: &Line, animate: bool) {
    let cells = line.cells().len();
    if !animate {
        print_frame(board, Some((line, cells)));
        return;
    }
    for revealed in 1..=cells {
        print_frame(board, Some((line, revealed)));
        if revealed < cells {
            tokio::time::sleep(WIN_SWEEP_FRAME).await;
        }
    }
}
