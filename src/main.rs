#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, Write};

#[cfg(feature = "std")]
use clap::Parser;

#[cfg(feature = "std")]
use tictactoe::{
    announce_win, coord_to_string, init_logging, print_board, prompt_move, Game, Outcome,
    PlayOutcome, PlayerCommand,
};

#[derive(Parser)]
#[command(author, version, about = "Tic-tac-toe for two players at one terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Skip the winning-line reveal animation")]
    no_animation: bool,
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    println!("══════════════════════════════════════");
    println!("             TIC-TAC-TOE");
    println!("══════════════════════════════════════");
    println!("Two players share the keyboard. X begins.");

    loop {
        let quit = play_round(!cli.no_animation).await?;
        if quit {
            break;
        }
    }
    Ok(())
}

/// Run one game to completion. Returns true when the player wants out.
#[cfg(feature = "std")]
async fn play_round(animate: bool) -> anyhow::Result<bool> {
    let mut game = Game::new();
    log::info!("new game started");

    loop {
        println!();
        print_board(&game.board());

        let (row, col) = match prompt_move(game.to_move(), &game.board())? {
            PlayerCommand::Cell(row, col) => (row, col),
            PlayerCommand::Quit => return Ok(true),
        };

        match game.play(row, col).map_err(|e| anyhow::anyhow!(e))? {
            PlayOutcome::Placed { player, outcome } => {
                log::debug!("{} played {}", player, coord_to_string(row, col));
                match outcome {
                    Outcome::Win { player, line } => {
                        println!();
                        announce_win(&game.board(), &line, animate).await;
                        println!("\n{} wins!", player);
                        log::info!("game over: {} wins", player);
                        break;
                    }
                    Outcome::Draw => {
                        println!();
                        print_board(&game.board());
                        println!("\nDraw!");
                        log::info!("game over: draw");
                        break;
                    }
                    Outcome::InProgress => {}
                }
            }
            PlayOutcome::Ignored => println!("That cell is taken."),
            PlayOutcome::GameOver => break,
        }
    }

    print!("\nPress ENTER to play again, anything else to exit: ");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(true);
    }
    Ok(!line.trim().is_empty())
}
