//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules of a classic falling-block game: the board,
//! the piece catalog, and the engine that drives a session. It has **no
//! dependencies** on rendering, input, timers, or I/O:
//!
//! - **Deterministic**: same config and seed produce identical games
//! - **Synchronous**: every operation runs to completion and returns its outcome
//! - **Portable**: a host supplies ticks and actions from any frontend
//!
//! # Module Structure
//!
//! - [`board`]: `rows x columns` grid with collision checks and line clearing
//! - [`pieces`]: the seven shape matrices, clockwise rotation, spawn placement
//! - [`game_state`]: the session engine (current piece, preview, score, level)
//! - [`rng`]: seeded piece selection (7-bag, uniform, fixed sequence)
//! - [`scoring`]: line-clear points and level progression
//! - [`snapshot`]: serializable views for renderers and observers
//! - [`config`]: engine configuration and environment overrides
//!
//! # Game Rules
//!
//! - Pieces spawn horizontally centered on the top row.
//! - Rotation is clockwise around the shape's bounding box with no wall kicks;
//!   a colliding rotation is rejected.
//! - A piece that cannot move down freezes into the board, full rows are
//!   removed, and the next piece spawns. A blocked spawn ends the game.
//! - Each cleared line is worth 100 points; the level goes up by one every time
//!   the score crosses a multiple of 100.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, GameEngine};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameEngine::new(EngineConfig::default().seed(12345)).unwrap();
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! The engine never schedules anything. Call [`GameEngine::tick`] at whatever
//! cadence the host chooses; [`GameEngine::drop_interval_ms`] suggests one per level.

pub mod board;
pub mod config;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use game_state::{ClearResult, FreezeEvent, GameEngine, Phase, TickOutcome};
pub use pieces::{base_shape, spawn_position, try_rotate, Piece, Shape};
pub use rng::{PieceQueue, Randomizer, SimpleRng};
pub use scoring::{award, calculate_level, drop_interval_ms, ScoreResult, ScoringRule};
pub use snapshot::{GameSnapshot, PieceSnapshot};
