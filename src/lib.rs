//! Guff (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so binaries, tests and
//! benches can use `guff::{core, input, term, types}`.

pub use guff_core as core;
pub use guff_input as input;
pub use guff_term as term;
pub use guff_types as types;
