//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the world model and the control loop. It has **no
//! dependencies** on terminal libraries; the terminal is reached only through the
//! [`Terminal`] trait, so the whole game can be driven by scripted keys.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed terrain and map loading
//! - [`world`]: grid + player position, walkability and movement
//! - [`game`]: the `Start -> Playing -> Won | Quit` state machine
//! - [`session`]: the render / read / update loop over a [`Terminal`]
//! - [`error`]: map loading errors
//!
//! # Example
//!
//! ```
//! use tiny_adventure_core::{MoveResult, World};
//! use tiny_adventure_types::Direction;
//!
//! let mut world = World::shipped().unwrap();
//! assert_eq!(
//!     world.try_move(Direction::Down),
//!     MoveResult::Moved { stepped_on_treasure: true }
//! );
//! ```

pub mod error;
pub mod game;
pub mod grid;
pub mod session;
pub mod world;

pub use tiny_adventure_types as types;

pub use error::MapError;
pub use game::{Flow, Game, Phase, Screen};
pub use grid::{initialize, Grid};
pub use session::{run, Terminal};
pub use world::{MoveResult, World};
