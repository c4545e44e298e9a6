use crate::snake::Position;

/// Cell content selector for draw instructions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Glyph {
    Apple,
    SnakeBody,
    Empty,
}

/// One cell-level drawing instruction emitted by a tick.
///
/// The engine never draws directly; it hands these to the adapter, which is
/// the only party touching the terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct RenderOp {
    pub at: Position,
    pub glyph: Glyph,
}

impl RenderOp {
    /// Builds a draw instruction for `glyph` at `at`.
    #[must_use]
    pub fn draw(at: Position, glyph: Glyph) -> Self {
        Self { at, glyph }
    }
}
