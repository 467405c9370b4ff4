//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole game simulation: the shape catalog, the
//! falling piece, and the board with its collision, settling, row-clearing
//! and spawning rules. It has **zero dependencies** on UI, input, or I/O:
//!
//! - **Deterministic**: Same seed produces the identical piece sequence
//! - **Synchronous**: Every command runs to completion; nothing blocks or yields
//! - **Infallible**: Invalid commands are rejected and leave the state untouched
//!
//! # Module Structure
//!
//! - [`shapes`]: The 7 tetromino bitmaps as static data
//! - [`piece`]: Falling piece with position, rotation and state tag
//! - [`board`]: Landed grid, validity checks, settling and row clearing
//! - [`rng`]: Seeded random piece source
//!
//! # Game Rules
//!
//! - **No wall kicks**: A rotation that collides or leaves the board is rejected
//! - **Two-slot lookahead**: The next piece is always known
//! - **Levels**: One level per 10 cleared rows
//! - **Game over**: When a freshly spawned piece overlaps landed cells
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Board, StandardBoard, TickOutcome};
//! use blockfall_types::GameAction;
//!
//! let mut board: StandardBoard = Board::new(12345);
//!
//! board.apply_action(GameAction::MoveRight);
//! board.apply_action(GameAction::RotateCw);
//!
//! // Tick until the piece settles.
//! while matches!(board.update(), TickOutcome::Fell) {}
//!
//! assert!(!board.is_game_over());
//! assert_eq!(board.line_clears(), 0);
//! ```
//!
//! # Timing
//!
//! The board has no clock. Drivers render at a fixed frame rate and call
//! [`Board::update`](board::Board::update) once every
//! [`Board::update_cycle_threshold`](board::Board::update_cycle_threshold)
//! frames.

pub mod board;
pub mod piece;
pub mod rng;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, StandardBoard, TickOutcome};
pub use piece::FallingPiece;
pub use rng::{GameRng, PieceSource};
pub use shapes::{get_shape, Shape};
