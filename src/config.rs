use crossterm::style::Color;

/// Logical grid dimensions passed through the game as a named type.
///
/// Makes width vs. height unambiguous at every call site instead of an
/// anonymous `(u16, u16)` tuple.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Key-poll budget per tick in milliseconds. The poll doubles as the tick
/// cadence: it returns early on input, otherwise after the full budget.
pub const POLL_TIMEOUT_MS: u64 = 100;

/// How long the final-score overlay stays on screen, in milliseconds.
pub const GAME_OVER_HOLD_MS: u64 = 2000;

/// Smallest viewport that keeps the fixed starting layout strictly inside
/// the walls (snake rows 13..=15 at column 10).
pub const MIN_GRID_WIDTH: u16 = 12;
pub const MIN_GRID_HEIGHT: u16 = 17;

/// Apple glyph.
pub const GLYPH_APPLE: &str = "●";

/// Snake segment glyph, head included.
pub const GLYPH_SNAKE: &str = "█";

/// Glyph drawn when a cell is vacated.
pub const GLYPH_EMPTY: &str = " ";

/// Box-drawing set for the outer wall.
pub const BORDER_HORIZONTAL: &str = "─";
pub const BORDER_VERTICAL: &str = "│";
pub const BORDER_TOP_LEFT: &str = "┌";
pub const BORDER_TOP_RIGHT: &str = "┐";
pub const BORDER_BOTTOM_LEFT: &str = "└";
pub const BORDER_BOTTOM_RIGHT: &str = "┘";

pub const COLOR_APPLE: Color = Color::Red;
pub const COLOR_SNAKE: Color = Color::Green;
pub const COLOR_BORDER: Color = Color::White;
pub const COLOR_OVERLAY: Color = Color::Yellow;
