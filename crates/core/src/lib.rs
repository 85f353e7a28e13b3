//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else: no terminal, no
//! timer, no input handling. A driver owns one [`GameState`] and calls its
//! operations strictly one at a time.
//!
//! - **Deterministic**: the same seed yields the same piece sequence
//! - **Testable**: every rule is reachable without I/O
//! - **Passive**: gravity only happens when the driver calls `tick`
//!
//! # Module Structure
//!
//! - [`board`]: the locked-cell grid and row clearing
//! - [`shape`]: occupancy matrices and the 90° rotation transform
//! - [`pieces`]: the seven-piece catalog
//! - [`rng`]: uniform random piece selection
//! - [`collision`]: the single legality check for placements
//! - [`game_state`]: falling piece control, locking, scoring, spawn/game over
//! - [`snapshot`]: read model for renderers
//! - [`config`]: board size, line bonus and spawn column
//!
//! # Game Rules
//!
//! - Pieces spawn with their top-left cell at column 3, row 0 (on 10 wide)
//! - Rotation is clockwise only and never kicks off walls or stacks
//! - Each cleared row is worth a flat 10 points
//! - A spawn that overlaps the stack ends the session
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, Phase, TickOutcome};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! assert!(game.start_new_game());
//! assert_eq!(game.phase(), Phase::Falling);
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//! let landing = game.ghost_row();
//! assert!(landing.is_some());
//!
//! assert!(matches!(game.hard_drop(), TickOutcome::Locked(_)));
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use config::{ConfigError, EngineConfig};
pub use game_state::{ActivePiece, GameState, LockEvent, Phase, Position, TickOutcome};
pub use pieces::{base_shape, Piece};
pub use rng::PieceSpawner;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
