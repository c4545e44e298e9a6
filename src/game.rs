use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::apple::Apple;
use crate::config::GridSize;
use crate::input::{Direction, direction_change_is_valid};
use crate::render::{Glyph, RenderOp};
use crate::snake::{Position, Snake};

/// Fixed starting body, head first.
const INITIAL_SNAKE: [Position; 3] = [
    Position { row: 15, col: 10 },
    Position { row: 14, col: 10 },
    Position { row: 13, col: 10 },
];

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::WallCollision => "hit the wall",
            Self::SelfCollision => "ran into yourself",
        })
    }
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    GameOver(DeathReason),
}

/// Complete mutable game state for one session.
///
/// Owned exclusively by the engine; the adapter only sees the render
/// instructions a tick emits.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Apple,
    pub direction: Direction,
    pub score: u32,
    pub status: GameStatus,
    /// Every apple cell consumed so far, in order. Reported on exit.
    pub apples_eaten: Vec<Position>,
    bounds: GridSize,
    rng: StdRng,
}

impl GameState {
    /// Creates a fresh state with an entropy-seeded apple spawner.
    #[must_use]
    pub fn new(bounds: GridSize) -> Self {
        Self::with_rng(bounds, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(bounds: GridSize, seed: u64) -> Self {
        Self::with_rng(bounds, StdRng::seed_from_u64(seed))
    }

    fn with_rng(bounds: GridSize, rng: StdRng) -> Self {
        Self {
            snake: Snake::from_segments(INITIAL_SNAKE.to_vec()),
            apple: Apple::initial(bounds),
            direction: Direction::Right,
            score: 0,
            status: GameStatus::Playing,
            apples_eaten: Vec::new(),
            bounds,
            rng,
        }
    }

    /// Returns the board dimensions this state was created with.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Advances the simulation by one tick.
    ///
    /// `requested` is the latest key-mapped direction polled this tick, or
    /// `None` when no key arrived within the budget. Returns the draw
    /// instructions for the adapter; once the status has left `Playing` the
    /// state is frozen and further ticks emit nothing.
    pub fn tick(&mut self, requested: Option<Direction>) -> Vec<RenderOp> {
        let mut ops = Vec::with_capacity(3);
        if self.status != GameStatus::Playing {
            return ops;
        }

        // A reversal of the previously applied direction is dropped; the
        // accepted direction becomes the reference for the next tick.
        if let Some(candidate) = requested {
            if direction_change_is_valid(self.direction, candidate) {
                self.direction = candidate;
            }
        }

        let next_head = self.snake.head().step(self.direction);
        if next_head == self.apple.position {
            self.snake.advance(next_head, true);
            self.score += 1;
            self.apples_eaten.push(next_head);
            self.apple = Apple::respawn(&mut self.rng, self.bounds);
            ops.push(RenderOp::draw(self.apple.position, Glyph::Apple));
        } else if let Some(vacated) = self.snake.advance(next_head, false) {
            ops.push(RenderOp::draw(vacated, Glyph::Empty));
        }
        ops.push(RenderOp::draw(next_head, Glyph::SnakeBody));

        // Wall collision first, then self collision; either freezes the state.
        if next_head.touches_border(self.bounds) {
            self.status = GameStatus::GameOver(DeathReason::WallCollision);
        } else if self.snake.head_overlaps_body() {
            self.status = GameStatus::GameOver(DeathReason::SelfCollision);
        }

        ops
    }
}

#[cfg(test)]
mod tests {
    use crate::apple::Apple;
    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::render::{Glyph, RenderOp};
    use crate::snake::{Position, Snake};

    use super::{DeathReason, GameState, GameStatus};

    fn bounds() -> GridSize {
        GridSize {
            width: 20,
            height: 20,
        }
    }

    #[test]
    fn plain_move_keeps_snake_length() {
        let mut state = GameState::new_with_seed(bounds(), 1);
        let length = state.snake.len();

        let ops = state.tick(None);

        assert_eq!(state.snake.len(), length);
        assert_eq!(
            ops,
            vec![
                RenderOp::draw(Position { row: 13, col: 10 }, Glyph::Empty),
                RenderOp::draw(Position { row: 15, col: 11 }, Glyph::SnakeBody),
            ]
        );
    }

    #[test]
    fn eating_the_apple_grows_scores_and_respawns() {
        let mut state = GameState::new_with_seed(bounds(), 2);
        state.apple = Apple::at(Position { row: 15, col: 11 });

        let ops = state.tick(None);

        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.apples_eaten, vec![Position { row: 15, col: 11 }]);
        assert!(!state.apple.position.touches_border(bounds()));
        // Growth tick plots the new apple and the new head, clears nothing.
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[0], RenderOp::draw(state.apple.position, Glyph::Apple));
        assert_eq!(
            ops[1],
            RenderOp::draw(Position { row: 15, col: 11 }, Glyph::SnakeBody)
        );
    }

    #[test]
    fn reversal_input_is_ignored_for_the_tick() {
        let mut state = GameState::new_with_seed(bounds(), 3);
        assert_eq!(state.direction, Direction::Right);

        state.tick(Some(Direction::Left));

        assert_eq!(state.direction, Direction::Right);
        assert_eq!(state.snake.head(), Position { row: 15, col: 11 });
    }

    #[test]
    fn perpendicular_turn_is_accepted() {
        let mut state = GameState::new_with_seed(bounds(), 4);

        state.tick(Some(Direction::Down));

        assert_eq!(state.direction, Direction::Down);
        assert_eq!(state.snake.head(), Position { row: 16, col: 10 });
    }

    #[test]
    fn direction_is_stable_across_empty_polls() {
        let mut state = GameState::new_with_seed(bounds(), 5);

        for _ in 0..4 {
            state.tick(None);
            assert_eq!(state.direction, Direction::Right);
        }
    }

    #[test]
    fn five_ticks_right_reach_the_expected_head() {
        let mut state = GameState::new_with_seed(bounds(), 6);

        for _ in 0..5 {
            state.tick(Some(Direction::Right));
        }

        assert_eq!(state.snake.head(), Position { row: 15, col: 15 });
        assert_eq!(state.score, 0);
        assert_eq!(state.status, GameStatus::Playing);
    }

    #[test]
    fn wall_contact_ends_the_game_on_that_tick() {
        let mut state = GameState::new_with_seed(bounds(), 7);
        state.snake = Snake::from_segments(vec![
            Position { row: 5, col: 18 },
            Position { row: 5, col: 17 },
            Position { row: 5, col: 16 },
        ]);

        state.tick(None);

        assert_eq!(
            state.status,
            GameStatus::GameOver(DeathReason::WallCollision)
        );
    }

    #[test]
    fn top_wall_is_lethal_too() {
        let mut state = GameState::new_with_seed(bounds(), 8);
        state.snake = Snake::from_segments(vec![
            Position { row: 1, col: 5 },
            Position { row: 2, col: 5 },
            Position { row: 3, col: 5 },
        ]);
        state.direction = Direction::Up;

        state.tick(None);

        assert_eq!(
            state.status,
            GameStatus::GameOver(DeathReason::WallCollision)
        );
    }

    #[test]
    fn self_collision_ends_the_game() {
        let mut state = GameState::new_with_seed(bounds(), 9);
        // Head at (5,5) turning up into a body loop directly above.
        state.snake = Snake::from_segments(vec![
            Position { row: 5, col: 5 },
            Position { row: 5, col: 6 },
            Position { row: 4, col: 6 },
            Position { row: 4, col: 5 },
            Position { row: 4, col: 4 },
        ]);
        state.direction = Direction::Left;

        state.tick(Some(Direction::Up));

        assert_eq!(
            state.status,
            GameStatus::GameOver(DeathReason::SelfCollision)
        );
    }

    #[test]
    fn frozen_state_emits_no_further_instructions() {
        let mut state = GameState::new_with_seed(bounds(), 10);
        state.status = GameStatus::GameOver(DeathReason::WallCollision);
        let head = state.snake.head();

        let ops = state.tick(Some(Direction::Down));

        assert!(ops.is_empty());
        assert_eq!(state.snake.head(), head);
    }
}
