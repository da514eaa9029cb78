//! Blocking reads from the terminal event queue.

use std::io;

use crossterm::event::{self, Event};

use crate::map::key_from_event;
use crate::types::Key;

/// Events the game loop cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    /// The terminal changed size; the current frame must be drawn again.
    Resize { width: u16, height: u16 },
}

/// Classify one raw terminal event. Mouse, focus and paste events are dropped.
pub fn input_from_event(ev: Event) -> Option<InputEvent> {
    match ev {
        Event::Key(key) => key_from_event(key).map(InputEvent::Key),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}

/// Block until the next relevant event. No timeout.
pub fn read_input() -> io::Result<InputEvent> {
    loop {
        if let Some(ev) = input_from_event(event::read()?) {
            return Ok(ev);
        }
    }
}
