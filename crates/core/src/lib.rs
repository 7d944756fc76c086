//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and timing logic.
//! It has no dependencies on rendering, input, or I/O:
//!
//! - **Deterministic**: the same seed and the same sequence of actions and
//!   frame deltas always produce the same game
//! - **Infallible**: invalid moves report `false`, out-of-range board reads
//!   return `None`, and a blocked spawn is a game state, not an error
//! - **Allocation-free**: every entity is a small fixed-size value
//!
//! # Module Structure
//!
//! - [`board`]: 10x40 grid (20 hidden + 20 visible rows) with line clearing
//! - [`piece`]: Tetromino shape tables, collision and kick rotation
//! - [`rng`]: 7-bag randomizer on a seeded LCG
//! - [`scoring`]: Line clear points, level curve, gravity speed
//! - [`flash`]: Tetris flash animation countdown
//! - [`game`]: The orchestrating state machine
//! - [`snapshot`]: Read-only per-frame view of the game
//!
//! # Example
//!
//! ```
//! use termv_core::Game;
//! use termv_types::{GameAction, GameStatus};
//!
//! let mut game = Game::new(12345);
//! assert_eq!(game.status(), GameStatus::Running);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//! assert!(game.score() > 0); // Hard drop awards points
//!
//! // One frame: 16ms of gravity (or flash animation).
//! game.tick(16.0);
//! ```

pub mod board;
pub mod flash;
pub mod game;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use termv_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use flash::LineFlash;
pub use game::Game;
pub use piece::{get_shape, Piece, KICKS};
pub use rng::{PieceBag, SimpleRng};
pub use scoring::{calculate_hard_drop_score, calculate_line_score, gravity_interval_ms};
pub use snapshot::{ActiveSnapshot, ColorGrid, FlashSnapshot, GameSnapshot};
