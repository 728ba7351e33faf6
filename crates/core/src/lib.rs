//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation
//! logic. It has no dependencies on the terminal or any other I/O, so a
//! session can run headless under test with a fixed seed.
//!
//! # Module Structure
//!
//! - [`piece`]: Tetromino shape matrices and pure rotation
//! - [`kicks`]: SRS wall kick tables and the kick search
//! - [`board`]: 10x20 playfield with collision, spawning and row clearing
//! - [`bag`]: 7-bag random piece generation
//! - [`scoring`]: Line-clear points, level and gravity speed
//! - [`game_state`]: Session state, hold, lock delay and gravity
//! - [`snapshot`]: Copy-out view for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every seven consecutive draws contain each piece once
//! - **SRS Rotation**: five kick candidates per rotation; I uses its own table
//! - **Lock Delay**: 500ms before a grounded piece locks, at most 10 resets
//! - **Hold**: store one piece for later use (once per lock)
//! - **Scoring**: 40/100/300/1200 for 1-4 rows, one level per 500 points
//! - **Top-out**: a blocked spawn resets the session instead of ending it
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::with_seed(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // One piece locked; no rows could have been cleared yet.
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.board().cells().iter().filter(|c| c.is_some()).count(), 4);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with the
//! elapsed milliseconds. Gravity runs every 1000ms at level 1 and speeds up
//! by 100ms per level until level 9.

pub mod bag;
pub mod board;
pub mod game_state;
pub mod kicks;
pub mod piece;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use bag::{generate_bag, Bag};
pub use board::{Board, SpawnBlocked};
pub use game_state::GameState;
pub use kicks::try_rotate;
pub use piece::{Piece, Shape};
pub use scoring::{gravity_interval_ms, level_for_score, line_clear_score};
pub use snapshot::GameSnapshot;
