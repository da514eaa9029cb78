//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every draw is a full clear and redraw. The last frame is kept so it can be
//! repainted after a resize without going back to the game.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Tone};

/// How styles are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// ANSI foreground colors and bold.
    Styled,
    /// Characters only.
    Plain,
}

impl ColorMode {
    /// Probe the terminal from `TERM`, `NO_COLOR` and crossterm's color count.
    pub fn detect() -> Self {
        let term = std::env::var("TERM").ok();
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::from_env(term.as_deref(), no_color, style::available_color_count())
    }

    /// An unset or `dumb` terminal, a non-empty `NO_COLOR`, or fewer than eight colors
    /// all mean plain text.
    pub fn from_env(term: Option<&str>, no_color: bool, color_count: u16) -> Self {
        match term {
            None | Some("") | Some("dumb") => ColorMode::Plain,
            Some(_) if no_color => ColorMode::Plain,
            Some(_) => Self::from_color_count(color_count),
        }
    }

    pub fn from_color_count(count: u16) -> Self {
        if count >= 8 {
            ColorMode::Styled
        } else {
            ColorMode::Plain
        }
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    mode: ColorMode,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(mode: ColorMode) -> Self {
        Self::with_writer(io::stdout(), mode)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W, mode: ColorMode) -> Self {
        Self {
            out,
            mode,
            last: None,
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Switch to the alternate screen and hide the cursor. Raw mode is managed by the caller.
    pub fn enter(&mut self) -> io::Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> io::Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()
    }

    /// Draw a framebuffer and keep it as the last frame.
    pub fn draw(&mut self, fb: FrameBuffer) -> io::Result<()> {
        self.buf.clear();
        encode_full_into(&fb, self.mode, &mut self.buf)?;
        self.flush_buf()?;
        self.last = Some(fb);
        Ok(())
    }

    /// Repaint the last frame at a new terminal size. Writes nothing before the first draw.
    pub fn redraw(&mut self, width: u16, height: u16) -> io::Result<()> {
        match self.last.take() {
            Some(mut fb) => {
                fb.resize(width, height);
                self.draw(fb)
            }
            None => Ok(()),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, mode: ColorMode, out: &mut Vec<u8>) -> io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if mode == ColorMode::Styled && current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    if mode == ColorMode::Styled {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> io::Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(tone_to_color(style.fg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn tone_to_color(tone: Tone) -> Color {
    match tone {
        Tone::Default => Color::Reset,
        Tone::Red => Color::DarkRed,
        Tone::Yellow => Color::DarkYellow,
        Tone::Green => Color::DarkGreen,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(fb: &FrameBuffer, mode: ColorMode) -> String {
        let mut out = Vec::new();
        encode_full_into(fb, mode, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn plain_mode_emits_no_color_sequences() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "#@$", CellStyle::new(Tone::Red, true));
        let text = encode(&fb, ColorMode::Plain);
        assert!(text.contains("#@$"));
        // SGR sequences end in 'm'; clear and cursor moves do not.
        assert!(!text.contains('m'));
    }

    #[test]
    fn styled_mode_switches_color_once_per_run() {
        let mut fb = FrameBuffer::new(3, 1);
        fb.put_str(0, 0, "###", CellStyle::new(Tone::Red, false));
        let styled = encode(&fb, ColorMode::Styled);
        let plain = encode(&fb, ColorMode::Plain);
        assert!(styled.contains("###"));
        assert!(styled.len() > plain.len());
    }

    #[test]
    fn color_count_threshold() {
        assert_eq!(ColorMode::from_color_count(0), ColorMode::Plain);
        assert_eq!(ColorMode::from_color_count(2), ColorMode::Plain);
        assert_eq!(ColorMode::from_color_count(8), ColorMode::Styled);
        assert_eq!(ColorMode::from_color_count(256), ColorMode::Styled);
    }

    #[test]
    fn dumb_unset_or_no_color_terminals_are_plain() {
        assert_eq!(ColorMode::from_env(None, false, 256), ColorMode::Plain);
        assert_eq!(ColorMode::from_env(Some(""), false, 256), ColorMode::Plain);
        assert_eq!(ColorMode::from_env(Some("dumb"), false, 8), ColorMode::Plain);
        assert_eq!(
            ColorMode::from_env(Some("xterm-256color"), true, 256),
            ColorMode::Plain
        );
        assert_eq!(
            ColorMode::from_env(Some("xterm-256color"), false, 256),
            ColorMode::Styled
        );
        assert_eq!(ColorMode::from_env(Some("vt100"), false, 2), ColorMode::Plain);
    }

    // The only test in this crate that touches the process environment.
    #[test]
    fn detect_reads_term_and_no_color() {
        std::env::remove_var("COLORTERM");
        std::env::remove_var("NO_COLOR");

        std::env::set_var("TERM", "dumb");
        assert_eq!(ColorMode::detect(), ColorMode::Plain);

        std::env::remove_var("TERM");
        assert_eq!(ColorMode::detect(), ColorMode::Plain);

        std::env::set_var("TERM", "xterm-256color");
        assert_eq!(ColorMode::detect(), ColorMode::Styled);

        std::env::set_var("NO_COLOR", "1");
        assert_eq!(ColorMode::detect(), ColorMode::Plain);
        std::env::remove_var("NO_COLOR");
    }

    #[test]
    fn redraw_before_first_draw_writes_nothing() {
        let mut renderer = TerminalRenderer::with_writer(Vec::new(), ColorMode::Plain);
        renderer.redraw(10, 4).unwrap();
        assert!(renderer.writer_mut().is_empty());
    }

    #[test]
    fn redraw_repaints_last_frame_at_new_size() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(0, 0, "#@$#", CellStyle::new(Tone::Yellow, true));
        fb.put_str(0, 1, "....", CellStyle::PLAIN);

        let mut renderer = TerminalRenderer::with_writer(Vec::new(), ColorMode::Styled);
        renderer.draw(fb.clone()).unwrap();
        assert_eq!(*renderer.writer_mut(), encode(&fb, ColorMode::Styled).into_bytes());
        renderer.writer_mut().clear();

        renderer.redraw(3, 3).unwrap();
        let mut expected = fb;
        expected.resize(3, 3);
        assert_eq!(expected.line(0), "#@$");
        assert_eq!(
            *renderer.writer_mut(),
            encode(&expected, ColorMode::Styled).into_bytes()
        );
    }

    #[test]
    fn tones_map_to_basic_colors() {
        assert_eq!(tone_to_color(Tone::Default), Color::Reset);
        assert_eq!(tone_to_color(Tone::Red), Color::DarkRed);
    }
}
