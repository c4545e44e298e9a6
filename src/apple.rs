use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Fixed first-apple cell, clamped into the interior at game start.
const INITIAL_APPLE: Position = Position { row: 20, col: 20 };

/// The single apple currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Apple {
    pub position: Position,
}

impl Apple {
    /// Creates an apple at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Returns the starting apple for a board of `bounds`.
    #[must_use]
    pub fn initial(bounds: GridSize) -> Self {
        Self::at(Position {
            row: INITIAL_APPLE.row.clamp(1, i32::from(bounds.height) - 2),
            col: INITIAL_APPLE.col.clamp(1, i32::from(bounds.width) - 2),
        })
    }

    /// Respawns the apple uniformly at random inside the open interior
    /// `[1, h-2] x [1, w-2]`.
    ///
    /// The roll does not consult the snake body, so an apple can land on an
    /// occupied cell and only becomes visible once the segment moves off it.
    #[must_use]
    pub fn respawn<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Self {
        Self::at(Position {
            row: rng.gen_range(1..=i32::from(bounds.height) - 2),
            col: rng.gen_range(1..=i32::from(bounds.width) - 2),
        })
    }
}
