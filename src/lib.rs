//! Tiny Adventure (workspace facade crate).
//!
//! Re-exports the member crates as `tiny_adventure::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use tiny_adventure_core as core;
pub use tiny_adventure_input as input;
pub use tiny_adventure_term as term;
pub use tiny_adventure_types as types;
