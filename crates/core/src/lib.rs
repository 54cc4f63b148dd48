//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds everything that decides where the avatar may stand and what
//! the debug actions do to the map. It has **zero dependencies** on terminals
//! or input devices, so every rule can be exercised headlessly.
//!
//! # Module Structure
//!
//! - [`tile`]: a single grid cell with passability, sprite and opacity
//! - [`area`]: sparse tile grid, decorations, and rectangle overlap queries
//! - [`avatar`]: the walker and its axis-separated movement resolution
//! - [`game`]: fixed map construction and per-tick action dispatch
//! - [`snapshot`]: render-facing copy of the game state
//!
//! # Example
//!
//! ```
//! use guff_core::Game;
//! use guff_types::{Action, Flow};
//!
//! let mut game = Game::new();
//! let start = game.avatar().position();
//!
//! assert_eq!(game.update(16, &[Action::Right]), Flow::Continue);
//! assert!(game.avatar().position().x > start.x);
//!
//! assert_eq!(game.update(16, &[Action::Quit]), Flow::Quit);
//! ```
//!
//! # Timing
//!
//! Movement is per tick, not per millisecond: each tick moves the avatar by its
//! speed on every held axis. The elapsed time passed to
//! [`Game::update`](game::Game::update) only feeds the session clock.

pub mod area;
pub mod avatar;
pub mod game;
pub mod snapshot;
pub mod tile;

pub use guff_types as types;

pub use area::{cells_covered, Area, Placeable, Rect};
pub use avatar::Avatar;
pub use game::Game;
pub use snapshot::{AvatarSnapshot, DecorationSnapshot, GameSnapshot, TileSnapshot};
pub use tile::Tile;
