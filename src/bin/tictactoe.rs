//! Tic-Tac-Toe solver CLI
//!
//! This CLI provides:
//! - Exhaustive analysis of any position given as a board string
//! - A perfect self-play demonstration from the empty board

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tictactoe_solver::{Board, GameOutcome, minimax, perfect_playout};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Perfect-play solver for 3x3 Tic-Tac-Toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a position given as a 9-character board string
    /// (row-major, '.' for empty cells, e.g. "XX.OO....")
    Analyze {
        /// Board cells in row-major order
        board: String,

        /// Write the evaluation as JSON to this path
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Play out a full game with both sides moving optimally
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { board, export } => analyze(&board, export),
        Commands::Demo => demo(),
    }
}

fn analyze(input: &str, export: Option<PathBuf>) -> Result<()> {
    let board = Board::from_string(input)?;

    println!("{board}");
    println!();

    if board.is_terminal() {
        match board.winner() {
            Some(player) => println!("Game over: {player} wins"),
            None => println!("Game over: draw"),
        }
        return Ok(());
    }

    println!("To move: {}", board.to_move());

    let evaluation = minimax::evaluate(&board)?;
    let verdict = match evaluation.value {
        1 => "X wins",
        -1 => "O wins",
        _ => "draw",
    };
    println!("Game value: {} ({verdict} with optimal play)", evaluation.value);

    if let Some(square) = evaluation.best_move {
        println!("Best move: {square}");
    }
    let tied: Vec<String> = evaluation
        .optimal_moves
        .iter()
        .map(|square| square.to_string())
        .collect();
    println!("Optimal moves: {}", tied.join(", "));
    println!("States examined: {}", evaluation.states_examined);

    if let Some(path) = export {
        serde_json::to_writer_pretty(File::create(&path)?, &evaluation)?;
        println!("\nEvaluation exported to: {}", path.display());
    }

    Ok(())
}

fn demo() -> Result<()> {
    println!("=== Perfect self-play ===\n");

    let game = perfect_playout()?;
    for (i, mv) in game.moves.iter().enumerate() {
        println!("{}. {} plays {}", i + 1, mv.player, mv.square);
    }

    println!();
    println!("{}", game.current_board()?);
    println!();
    match game.outcome {
        Some(GameOutcome::Win(player)) => println!("Result: {player} wins"),
        Some(GameOutcome::Draw) => println!("Result: draw"),
        None => println!("Result: unfinished"),
    }

    Ok(())
}
