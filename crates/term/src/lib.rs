//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. The board is drawn into a
//! framebuffer, which is then flushed to the terminal with crossterm.
//!
//! - `core` stays free of any I/O
//! - two terminal columns per board cell to compensate for glyph aspect ratio

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod tick_pacer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{state_color, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use tick_pacer::TickPacer;
