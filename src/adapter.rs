use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetForegroundColor};
use crossterm::{queue, terminal};

use crate::config::{
    BORDER_BOTTOM_LEFT, BORDER_BOTTOM_RIGHT, BORDER_HORIZONTAL, BORDER_TOP_LEFT, BORDER_TOP_RIGHT,
    BORDER_VERTICAL, COLOR_APPLE, COLOR_BORDER, COLOR_OVERLAY, COLOR_SNAKE, GLYPH_APPLE,
    GLYPH_EMPTY, GLYPH_SNAKE, GridSize,
};
use crate::render::Glyph;
use crate::snake::Position;

/// Terminal I/O surface the engine drives.
///
/// Implementations own the physical terminal. The engine only queries
/// dimensions once, polls for keys with a bounded budget, and issues
/// cell-level draw instructions followed by one `flush` per tick.
pub trait TerminalAdapter {
    /// Returns the viewport dimensions. Queried once at game start.
    fn dimensions(&self) -> io::Result<GridSize>;

    /// Returns the most recent key pressed within `timeout`, or `None` when
    /// the budget elapses without input. Must never block past the budget.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyCode>>;

    /// Queues one cell update. Takes effect on the next `flush`.
    fn draw(&mut self, at: Position, glyph: Glyph) -> io::Result<()>;

    /// Queues the outer wall around the full viewport.
    fn draw_border(&mut self, bounds: GridSize) -> io::Result<()>;

    /// Pushes all queued drawing to the screen.
    fn flush(&mut self) -> io::Result<()>;

    /// Queues `text` centered over the play area. Used once at game end.
    fn overlay_text(&mut self, bounds: GridSize, text: &str) -> io::Result<()>;
}

/// Production adapter writing straight to stdout via crossterm.
///
/// Assumes the caller already holds a raw-mode/alternate-screen session;
/// see `terminal_runtime::TerminalSession`.
#[derive(Debug)]
pub struct CrosstermAdapter {
    stdout: io::Stdout,
}

impl CrosstermAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for CrosstermAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalAdapter for CrosstermAdapter {
    fn dimensions(&self) -> io::Result<GridSize> {
        let (width, height) = terminal::size()?;
        Ok(GridSize { width, height })
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<KeyCode>> {
        let mut latest = None;
        let mut budget = timeout;

        // Wait up to the budget for the first event, then drain whatever is
        // queued so the most recent key wins.
        while event::poll(budget)? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    latest = Some(key.code);
                }
            }
            budget = Duration::ZERO;
        }

        Ok(latest)
    }

    fn draw(&mut self, at: Position, glyph: Glyph) -> io::Result<()> {
        let (Ok(col), Ok(row)) = (u16::try_from(at.col), u16::try_from(at.row)) else {
            // Off-screen instructions are dropped, mirroring how the engine
            // treats the border as the edge of the world.
            return Ok(());
        };

        let (symbol, color) = match glyph {
            Glyph::Apple => (GLYPH_APPLE, COLOR_APPLE),
            Glyph::SnakeBody => (GLYPH_SNAKE, COLOR_SNAKE),
            Glyph::Empty => (GLYPH_EMPTY, Color::Reset),
        };

        queue!(
            self.stdout,
            MoveTo(col, row),
            SetForegroundColor(color),
            Print(symbol)
        )
    }

    fn draw_border(&mut self, bounds: GridSize) -> io::Result<()> {
        if bounds.width < 2 || bounds.height < 2 {
            return Ok(());
        }

        let inner = usize::from(bounds.width) - 2;
        let top = format!(
            "{BORDER_TOP_LEFT}{}{BORDER_TOP_RIGHT}",
            BORDER_HORIZONTAL.repeat(inner)
        );
        let bottom = format!(
            "{BORDER_BOTTOM_LEFT}{}{BORDER_BOTTOM_RIGHT}",
            BORDER_HORIZONTAL.repeat(inner)
        );

        queue!(
            self.stdout,
            SetForegroundColor(COLOR_BORDER),
            MoveTo(0, 0),
            Print(&top)
        )?;
        for row in 1..bounds.height - 1 {
            queue!(
                self.stdout,
                MoveTo(0, row),
                Print(BORDER_VERTICAL),
                MoveTo(bounds.width - 1, row),
                Print(BORDER_VERTICAL)
            )?;
        }
        queue!(self.stdout, MoveTo(0, bounds.height - 1), Print(&bottom))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }

    fn overlay_text(&mut self, bounds: GridSize, text: &str) -> io::Result<()> {
        let text_width = u16::try_from(text.chars().count()).unwrap_or(bounds.width);
        let col = bounds.width.saturating_sub(text_width) / 2;
        let row = bounds.height / 2;

        queue!(
            self.stdout,
            MoveTo(col, row),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(COLOR_OVERLAY),
            Print(text),
            SetAttribute(Attribute::Reset)
        )
    }
}
