//! Terminal input module.
//!
//! Maps `crossterm` events into logical [`crate::types::Key`]s. Classifying keys
//! into intents is left to the game itself, which never sees crossterm types.

pub mod map;
pub mod read;

pub use tiny_adventure_types as types;

pub use map::key_from_event;
pub use read::{input_from_event, read_input, InputEvent};
