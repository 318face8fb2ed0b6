//! Interactive Ludo driver: rolls dice, moves pieces, and overwrites a
//! single board PNG after each action.

use std::env;
use std::io::{self, BufRead, Write};

use ludo_core::{Game, GameError, MoveOutcome};
use ludo_render::DEFAULT_CELL_PX;

const DEFAULT_OUTPUT: &str = "./game-board.png";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: ludo [output.png] [cell_px]");
        std::process::exit(2);
    }
    let output = args.get(1).cloned().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());
    let cell_px: u32 = match args.get(2) {
        Some(s) => match s.parse() {
            Ok(v) if v > 0 => v,
            _ => {
                eprintln!("Usage: ludo [output.png] [cell_px]");
                std::process::exit(2);
            }
        },
        None => DEFAULT_CELL_PX,
    };

    let mut game = Game::new();
    save_board(&game, &output, cell_px);
    println!("Board written to {output}. It's {}'s turn.", game.current_player().name());
    print_help();

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["roll"] => {
                let rolled = game.roll_dice();
                println!("{} rolled a {rolled}.", game.current_player().name());
                if rolled == 6 {
                    println!("A 6! You can move a piece out of the house.");
                }
                save_board(&game, &output, cell_px);
            }
            ["turn"] => {
                let next = game.next_turn();
                println!("It's now {}'s turn.", next.name());
            }
            ["move", piece, steps] => {
                match (piece.parse::<usize>(), steps.parse::<u8>()) {
                    (Ok(piece), Ok(steps)) => {
                        report_move(game.move_current(piece, steps));
                        save_board(&game, &output, cell_px);
                    }
                    _ => println!("move wants two numbers: move <piece 0-3> <steps>"),
                }
            }
            ["release", piece] => match piece.parse::<usize>() {
                Ok(selection) => {
                    report_release(&mut game, selection);
                    save_board(&game, &output, cell_px);
                }
                Err(_) => println!("release wants a number: release <piece 0-3>"),
            },
            ["state"] => match serde_json::to_string_pretty(&game.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("snapshot serialization failed: {err}"),
            },
            _ => println!("Unknown command; try 'help'."),
        }
    }
    Ok(())
}

fn print_help() {
    println!(
        "Commands:\n  roll                 roll the dice\n  move <piece> <steps> move one of the current player's pieces\n  release <piece>      move a piece out of its house\n  turn                 pass the turn\n  state                print the board snapshot as JSON\n  help, quit"
    );
}

fn report_move(result: Result<MoveOutcome, GameError>) {
    match result {
        Ok(MoveOutcome::Moved { from, to, capture }) => {
            println!("Moved from {from} to {to}.");
            if let Some(c) = capture {
                println!("{} piece sent back home!", c.color.name());
            }
        }
        Ok(MoveOutcome::NotOnPath { at }) => {
            println!("That piece is not on the path (cell {at}); release it first.");
        }
        Err(err) => println!("{err}"),
    }
}

fn report_release(game: &mut Game, selection: usize) {
    // Release takes the same positional selection as move: the N-th piece
    // of the current player's color, registry order.
    let player = game.current_player();
    let idx = game
        .pieces()
        .iter()
        .enumerate()
        .filter(|(_, p)| p.color() == player)
        .map(|(i, _)| i)
        .nth(selection);
    let Some(idx) = idx else {
        println!(
            "{}",
            GameError::InvalidSelection {
                player: player.name(),
                index: selection,
                available: 4,
            }
        );
        return;
    };
    match game.release_from_house(idx) {
        Ok(capture) => {
            println!("Piece released onto the path.");
            if let Some(c) = capture {
                println!("{} piece sent back home!", c.color.name());
            }
        }
        Err(err) => println!("{err}"),
    }
}

/// Persistence is fire-and-forget: a failed write is reported and the
/// in-memory game state stands.
fn save_board(game: &Game, output: &str, cell_px: u32) {
    match ludo_render::render(&game.snapshot(), cell_px) {
        Ok(pixmap) => match ludo_render::write_png(&pixmap, output) {
            Ok(()) => println!("Game board updated. Check {output} for the latest state."),
            Err(err) => log::warn!("could not write {output}: {err}"),
        },
        Err(err) => log::warn!("render failed: {err}"),
    }
}
