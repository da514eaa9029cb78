//! GameView: maps a [`Screen`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Screen, World};
use crate::fb::{CellStyle, FrameBuffer, Tone};
use crate::types::{PLAYER_GLYPH, TREASURE_GLYPH, WALL_GLYPH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

const WALL_STYLE: CellStyle = CellStyle::new(Tone::Red, false);
const PLAYER_STYLE: CellStyle = CellStyle::new(Tone::Yellow, true);
const TREASURE_STYLE: CellStyle = CellStyle::new(Tone::Green, true);

/// Lays out screens in the terminal.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Terminal columns per map cell. Extra columns are left blank.
    cell_w: u16,
    anchor: Anchor,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            cell_w: 1,
            anchor: Anchor::TopLeft,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor: Anchor::TopLeft,
        }
    }

    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Render a screen into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, screen: &Screen<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        match *screen {
            Screen::Message(lines) => self.draw_message(fb, viewport, lines),
            Screen::Map { world, status } => self.draw_map(fb, viewport, world, status),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, screen: &Screen<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, viewport, &mut fb);
        fb
    }

    fn origin(&self, viewport: Viewport, w: u16, h: u16) -> (u16, u16) {
        match self.anchor {
            Anchor::TopLeft => (0, 0),
            Anchor::Center => (
                viewport.width.saturating_sub(w) / 2,
                viewport.height.saturating_sub(h) / 2,
            ),
        }
    }

    fn draw_message(&self, fb: &mut FrameBuffer, viewport: Viewport, lines: &[&str]) {
        let w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let (x0, y0) = self.origin(viewport, clamp_u16(w), clamp_u16(lines.len()));
        for (dy, line) in lines.iter().enumerate() {
            fb.put_str(x0, y0.saturating_add(clamp_u16(dy)), line, CellStyle::PLAIN);
        }
    }

    fn draw_map(&self, fb: &mut FrameBuffer, viewport: Viewport, world: &World, status: &str) {
        let grid = world.grid();
        let map_w = clamp_u16(grid.width()).saturating_mul(self.cell_w);
        let map_h = clamp_u16(grid.height());
        let block_w = map_w.max(clamp_u16(status.chars().count()));
        let (x0, y0) = self.origin(viewport, block_w, map_h.saturating_add(1));

        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let Some(ch) = world.glyph_at(row, col) else {
                    continue;
                };
                let x = x0.saturating_add(clamp_u16(col).saturating_mul(self.cell_w));
                let y = y0.saturating_add(clamp_u16(row));
                fb.put_char(x, y, ch, style_for(ch));
            }
        }

        fb.put_str(x0, y0.saturating_add(map_h), status, CellStyle::PLAIN);
    }
}

fn style_for(glyph: char) -> CellStyle {
    match glyph {
        WALL_GLYPH => WALL_STYLE,
        PLAYER_GLYPH => PLAYER_STYLE,
        TREASURE_GLYPH => TREASURE_STYLE,
        _ => CellStyle::PLAIN,
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
