use snek::apple::Apple;
use snek::config::GridSize;
use snek::game::{DeathReason, GameState, GameStatus};
use snek::input::Direction;
use snek::snake::Position;

fn board() -> GridSize {
    GridSize {
        width: 20,
        height: 20,
    }
}

#[test]
fn five_right_presses_cross_the_open_board() {
    let mut state = GameState::new_with_seed(board(), 42);

    for _ in 0..5 {
        state.tick(Some(Direction::Right));
    }

    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 0);
    assert_eq!(state.snake.head(), Position { row: 15, col: 15 });
    assert_eq!(state.snake.len(), 3);
}

#[test]
fn stepwise_apple_collection_then_wall_collision() {
    let mut state = GameState::new_with_seed(board(), 42);
    state.apple = Apple::at(Position { row: 15, col: 12 });

    state.tick(None);
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.snake.head(), Position { row: 15, col: 11 });

    // Second tick lands on the apple: growth, score, respawn.
    state.tick(None);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.apples_eaten, vec![Position { row: 15, col: 12 }]);
    assert!(!state.apple.position.touches_border(board()));

    // Park the apple out of the runway and ride into the right wall.
    state.apple = Apple::at(Position { row: 1, col: 1 });
    let mut ticks = 0;
    while state.status == GameStatus::Playing {
        state.tick(None);
        ticks += 1;
        assert!(ticks <= 10, "run should end at the wall");
    }

    // Columns 13 through 19 take seven ticks; the last one is the wall.
    assert_eq!(ticks, 7);
    assert_eq!(
        state.status,
        GameStatus::GameOver(DeathReason::WallCollision)
    );
    assert_eq!(state.snake.head(), Position { row: 15, col: 19 });
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 4);
}

#[test]
fn reversal_mid_run_is_dropped_but_later_turns_apply() {
    let mut state = GameState::new_with_seed(board(), 42);

    state.tick(Some(Direction::Left));
    assert_eq!(state.snake.head(), Position { row: 15, col: 11 });

    state.tick(Some(Direction::Up));
    assert_eq!(state.snake.head(), Position { row: 14, col: 11 });

    // Down now reverses the applied Up and is dropped in turn.
    state.tick(Some(Direction::Down));
    assert_eq!(state.snake.head(), Position { row: 13, col: 11 });
    assert_eq!(state.status, GameStatus::Playing);
}
