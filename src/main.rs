//! Terminal treasure hunt (default binary).
//!
//! Walk the `@` to the `$` with the arrow keys or WASD; `q` quits.
//! Set `RUST_LOG` (and redirect stderr) to capture logs.

use anyhow::{Context, Result};

use tiny_adventure::core::{run, World};
use tiny_adventure::term::{Anchor, CrosstermTerminal, GameView};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    // Load the map before touching the terminal so a bad map never leaves it in raw mode.
    let world = World::shipped().context("invalid built-in map")?;

    // One terminal column per map cell, drawn from the top-left corner.
    let view = GameView::new(1).with_anchor(Anchor::TopLeft);
    let mut term = CrosstermTerminal::with_view(view).context("failed to initialize terminal")?;
    log::info!("color mode: {:?}", term.color_mode());
    let outcome = run(&mut term, world);

    // Restore the terminal before any error is printed.
    drop(term);
    let outcome = outcome.context("terminal I/O failed")?;
    log::info!("exiting after {:?}", outcome);
    Ok(())
}
