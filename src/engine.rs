use std::thread;
use std::time::Duration;

use crate::adapter::TerminalAdapter;
use crate::config::{GAME_OVER_HOLD_MS, MIN_GRID_HEIGHT, MIN_GRID_WIDTH, POLL_TIMEOUT_MS};
use crate::error::GameError;
use crate::game::{DeathReason, GameState, GameStatus};
use crate::input::direction_for_key;
use crate::render::Glyph;
use crate::snake::Position;

/// Final outcome handed back to the caller once the loop ends.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub score: u32,
    pub death_reason: DeathReason,
    /// Apple cells consumed during the run, in order.
    pub apples_eaten: Vec<Position>,
}

/// Fixed-cadence update/render loop around one `GameState`.
///
/// The engine owns the state for the lifetime of a run and drives the
/// adapter; it never blocks beyond the per-tick poll budget.
pub struct GameEngine<A> {
    adapter: A,
    poll_timeout: Duration,
    game_over_hold: Duration,
}

impl<A: TerminalAdapter> GameEngine<A> {
    /// Creates an engine with the standard timings.
    #[must_use]
    pub fn new(adapter: A) -> Self {
        Self::with_timings(
            adapter,
            Duration::from_millis(POLL_TIMEOUT_MS),
            Duration::from_millis(GAME_OVER_HOLD_MS),
        )
    }

    /// Creates an engine with explicit timings. Tests pass zero durations to
    /// run the loop as fast as the scripted adapter allows.
    #[must_use]
    pub fn with_timings(adapter: A, poll_timeout: Duration, game_over_hold: Duration) -> Self {
        Self {
            adapter,
            poll_timeout,
            game_over_hold,
        }
    }

    /// Returns the adapter for post-run inspection.
    #[must_use]
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Runs one game to completion.
    ///
    /// Queries the viewport once, draws the initial board, then ticks until
    /// a collision ends the game. Any adapter failure aborts immediately and
    /// propagates; the caller's terminal session guard handles restore.
    pub fn run(&mut self, seed: Option<u64>) -> Result<GameSummary, GameError> {
        let bounds = self.adapter.dimensions()?;
        if bounds.width < MIN_GRID_WIDTH || bounds.height < MIN_GRID_HEIGHT {
            return Err(GameError::ViewportTooSmall {
                width: bounds.width,
                height: bounds.height,
            });
        }

        let mut state = match seed {
            Some(seed) => GameState::new_with_seed(bounds, seed),
            None => GameState::new(bounds),
        };

        self.adapter.draw_border(bounds)?;
        for segment in state.snake.segments() {
            self.adapter.draw(*segment, Glyph::SnakeBody)?;
        }
        self.adapter.draw(state.apple.position, Glyph::Apple)?;
        self.adapter.flush()?;

        let death_reason = loop {
            let key = self.adapter.poll_key(self.poll_timeout)?;
            let requested = key.and_then(direction_for_key);

            for op in state.tick(requested) {
                self.adapter.draw(op.at, op.glyph)?;
            }
            self.adapter.flush()?;

            if let GameStatus::GameOver(reason) = state.status {
                break reason;
            }
        };

        self.adapter
            .overlay_text(bounds, &format!("Game over! Score: {}", state.score))?;
        self.adapter.flush()?;
        thread::sleep(self.game_over_hold);

        Ok(GameSummary {
            score: state.score,
            death_reason,
            apples_eaten: state.apples_eaten,
        })
    }
}
