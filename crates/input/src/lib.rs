//! Terminal input module (board-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. The key
//! map is fixed. Quitting is reported separately because it ends the driver
//! loop rather than acting on the board.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};
