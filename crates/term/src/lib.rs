//! Terminal front end.
//!
//! A small rendering layer for the game: screens are laid out into a plain
//! framebuffer by [`GameView`] (pure, testable) and flushed by
//! [`TerminalRenderer`]. [`CrosstermTerminal`] ties both to crossterm input and
//! implements the core [`core::Terminal`] trait.
//!
//! Visual classes:
//! - walls: red
//! - player: bold yellow
//! - treasure: bold green
//!
//! Terminals reporting fewer than eight colors get plain characters.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod terminal;

pub use tiny_adventure_core as core;
pub use tiny_adventure_input as input;
pub use tiny_adventure_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Tone};
pub use game_view::{Anchor, GameView, Viewport};
pub use renderer::{encode_full_into, ColorMode, TerminalRenderer};
pub use terminal::{CrosstermTerminal, TerminalError, TerminalInitError};
