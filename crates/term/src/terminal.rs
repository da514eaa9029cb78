//! CrosstermTerminal: the real terminal behind [`crate::core::Terminal`].
//!
//! Raw mode is acquired in [`CrosstermTerminal::init`] and released in `Drop`, so
//! every exit path (win, quit, error, panic unwind) restores the terminal.

use std::io;

use crossterm::terminal;
use thiserror::Error;

use crate::core::{Screen, Terminal};
use crate::game_view::{GameView, Viewport};
use crate::input::{read_input, InputEvent};
use crate::renderer::{ColorMode, TerminalRenderer};
use crate::types::Key;

/// The terminal could not be put into a usable state.
#[derive(Error, Debug)]
pub enum TerminalInitError {
    #[error("could not enable raw mode (is stdin a terminal?)")]
    RawMode(#[source] io::Error),
    #[error("could not prepare the screen")]
    Screen(#[source] io::Error),
}

/// I/O failure while the game is running.
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("failed to draw to the terminal")]
    Draw(#[source] io::Error),
    #[error("failed to read from the terminal")]
    Read(#[source] io::Error),
}

pub struct CrosstermTerminal {
    renderer: TerminalRenderer,
    view: GameView,
}

impl CrosstermTerminal {
    pub fn init() -> Result<Self, TerminalInitError> {
        Self::with_view(GameView::default())
    }

    pub fn with_view(view: GameView) -> Result<Self, TerminalInitError> {
        let mode = ColorMode::detect();
        terminal::enable_raw_mode().map_err(TerminalInitError::RawMode)?;

        // From here on, Drop undoes whatever was set up.
        let mut term = Self {
            renderer: TerminalRenderer::new(mode),
            view,
        };
        term.renderer.enter().map_err(TerminalInitError::Screen)?;
        log::debug!("terminal acquired, color mode {:?}", mode);
        Ok(term)
    }

    pub fn color_mode(&self) -> ColorMode {
        self.renderer.mode()
    }

    fn viewport() -> Viewport {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl Terminal for CrosstermTerminal {
    type Error = TerminalError;

    fn render(&mut self, screen: &Screen<'_>) -> Result<(), TerminalError> {
        let fb = self.view.render(screen, Self::viewport());
        self.renderer.draw(fb).map_err(TerminalError::Draw)
    }

    fn read_key(&mut self) -> Result<Key, TerminalError> {
        loop {
            match read_input().map_err(TerminalError::Read)? {
                InputEvent::Key(key) => return Ok(key),
                InputEvent::Resize { width, height } => {
                    log::trace!("resize to {}x{}", width, height);
                    self.renderer
                        .redraw(width, height)
                        .map_err(TerminalError::Draw)?;
                }
            }
        }
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if let Err(err) = self.renderer.exit() {
            log::warn!("failed to restore screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("failed to leave raw mode: {}", err);
        }
        log::debug!("terminal released");
    }
}
