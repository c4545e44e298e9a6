use std::io;

use thiserror::Error;

/// Fatal failures surfaced by the game loop.
///
/// Rejected key presses and end-of-game collisions are deliberately absent:
/// the former are ignored, the latter are an ordinary return path.
#[derive(Debug, Error)]
pub enum GameError {
    /// The terminal could not be queried, polled, or drawn to. Aborts the
    /// game immediately; the session guard still restores the terminal.
    #[error("terminal adapter failure: {0}")]
    Adapter(#[from] io::Error),

    /// The viewport cannot enclose the fixed starting layout.
    #[error("viewport {width}x{height} is too small for the starting layout")]
    ViewportTooSmall { width: u16, height: u16 },
}
