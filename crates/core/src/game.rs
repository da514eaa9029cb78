//! Game module - the input-driven state machine
//!
//! ```text
//! Start --any key--> Playing --treasure--> Won  --any key--> (exit)
//!                       |
//!                       +------q/Q------> Quit --any key--> (exit)
//! ```
//!
//! Each call to [`Game::handle_key`] consumes exactly one key. Unrecognized keys
//! while playing are ignored and the map is simply drawn again.

use crate::types::{Intent, Key, Outcome, QUIT_LINES, STATUS_HELP, TITLE_LINES, WON_LINES};
use crate::world::{MoveResult, World};

/// Current screen of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Start,
    Playing,
    Won,
    Quit,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Playing => "playing",
            Phase::Won => "won",
            Phase::Quit => "quit",
        }
    }
}

/// Whether the loop should keep going after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// What the terminal should show. Borrowed from the live game, never a stale copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    /// Plain lines of text from the top-left corner.
    Message(&'a [&'a str]),
    /// The map with a status line beneath it.
    Map { world: &'a World, status: &'a str },
}

#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    phase: Phase,
}

impl Game {
    pub fn new(world: World) -> Self {
        Self {
            world,
            phase: Phase::Start,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::Start | Phase::Playing => Outcome::InProgress,
            Phase::Won => Outcome::Won,
            Phase::Quit => Outcome::Quit,
        }
    }

    pub fn screen(&self) -> Screen<'_> {
        match self.phase {
            Phase::Start => Screen::Message(&TITLE_LINES),
            Phase::Playing => Screen::Map {
                world: &self.world,
                status: STATUS_HELP,
            },
            Phase::Won => Screen::Message(&WON_LINES),
            Phase::Quit => Screen::Message(&QUIT_LINES),
        }
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: Key) -> Flow {
        // Closing screens only wait for a key to dismiss them.
        if self.outcome().is_finished() {
            return Flow::Exit;
        }
        if self.phase == Phase::Start {
            self.set_phase(Phase::Playing);
            return Flow::Continue;
        }
        if let Some(intent) = Intent::from_key(key) {
            self.apply(intent);
        }
        Flow::Continue
    }

    /// Apply a classified intent. Only meaningful while playing.
    pub fn apply(&mut self, intent: Intent) {
        if self.phase != Phase::Playing {
            return;
        }
        match intent {
            Intent::Quit => self.set_phase(Phase::Quit),
            Intent::Move(dir) => {
                if let MoveResult::Moved {
                    stepped_on_treasure: true,
                } = self.world.try_move(dir)
                {
                    self.set_phase(Phase::Won);
                }
            }
        }
    }

    fn set_phase(&mut self, next: Phase) {
        log::debug!("phase {} -> {}", self.phase.as_str(), next.as_str());
        self.phase = next;
    }
}
