//! Session driver: render, read one key, update, repeat.
//!
//! The driver only talks to the terminal through the [`Terminal`] trait, so the
//! whole loop can run against a scripted double in tests.

use crate::game::{Flow, Game, Screen};
use crate::types::{Key, Outcome};
use crate::world::World;

/// Terminal I/O service used by the session loop.
///
/// Acquiring and releasing the terminal is the implementor's job (constructor and `Drop`).
pub trait Terminal {
    type Error;

    /// Clear and redraw the whole screen.
    fn render(&mut self, screen: &Screen<'_>) -> Result<(), Self::Error>;

    /// Block until exactly one key is available.
    fn read_key(&mut self) -> Result<Key, Self::Error>;
}

/// Run a full session on `terminal` and return how it ended.
pub fn run<T: Terminal>(terminal: &mut T, world: World) -> Result<Outcome, T::Error> {
    let mut game = Game::new(world);

    loop {
        terminal.render(&game.screen())?;
        let key = terminal.read_key()?;
        if game.handle_key(key) == Flow::Exit {
            break;
        }
    }

    let outcome = game.outcome();
    log::info!(
        "session over: {:?} after {} moves",
        outcome,
        game.world().moves()
    );
    Ok(outcome)
}
