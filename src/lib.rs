//! Real-time terminal Snake.
//!
//! The crate splits along one seam: `game` owns all simulation state and
//! emits cell-level render instructions, while `adapter` is the only code
//! that touches the terminal. `engine` runs the fixed-cadence loop between
//! the two and returns a summary to the caller.

pub mod adapter;
pub mod apple;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod input;
pub mod render;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
