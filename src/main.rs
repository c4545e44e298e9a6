use std::process::ExitCode;

use clap::Parser;

use snek::adapter::CrosstermAdapter;
use snek::engine::{GameEngine, GameSummary};
use snek::error::GameError;
use snek::score::HighScore;
use snek::terminal_runtime::{TerminalSession, install_panic_hook};

/// Terminal Snake. Starts immediately; steer with the arrow keys or WASD.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed for the apple spawner, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Read the high score before raw mode so a parse warning stays readable.
    let high_score = match HighScore::load() {
        Ok(high_score) => high_score,
        Err(error) => {
            eprintln!("warning: could not read high score file: {error}");
            HighScore::default()
        }
    };

    install_panic_hook();

    match run_game(cli.seed) {
        Ok(summary) => {
            report(&summary, high_score);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Runs one game inside a scoped terminal session.
///
/// The session guard restores the terminal on both the normal and the
/// error path before the summary is printed.
fn run_game(seed: Option<u64>) -> Result<GameSummary, GameError> {
    let _session = TerminalSession::enter()?;
    let mut engine = GameEngine::new(CrosstermAdapter::new());
    engine.run(seed)
}

fn report(summary: &GameSummary, high_score: HighScore) {
    println!("Final score: {}", summary.score);
    println!("Cause: {}", summary.death_reason);

    if !summary.apples_eaten.is_empty() {
        println!("Apples eaten:");
        for position in &summary.apples_eaten {
            println!("  ({}, {})", position.row, position.col);
        }
    }

    match high_score.beaten_by(summary.score) {
        Some(updated) => {
            println!("New high score!");
            if let Err(error) = updated.save() {
                eprintln!("warning: could not save high score: {error}");
            }
        }
        None => println!("High score: {}", high_score.best),
    }
}
