//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play. It renders
//! into a plain framebuffer of styled character cells that is then flushed to
//! the terminal as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep view code pure (snapshot in, framebuffer out)
//! - Control the aspect ratio (by default a tile is 4 columns by 2 rows)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use guff_core as core;
pub use guff_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
