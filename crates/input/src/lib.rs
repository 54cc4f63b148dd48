//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key codes
//! into [`crate::types::Action`] and tracks which keys are currently held,
//! including on terminals that never emit key-release events.

pub mod control_state;
pub mod map;

pub use guff_types as types;

pub use control_state::ControlState;
pub use map::{action_for_key, is_interrupt, normalize_key};
