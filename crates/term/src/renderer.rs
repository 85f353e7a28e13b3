//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw; after that
//! only glyphs that differ from the previous frame are rewritten.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    /// Restore the terminal.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        match &mut self.last {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next` on screen.
///
/// With no previous frame, or one of a different size, the whole screen is
/// cleared and redrawn.
pub fn encode_frame_into(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let prev = prev.filter(|p| (p.width(), p.height()) == (next.width(), next.height()));
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut current: Option<Style> = None;
    for y in 0..next.height() {
        // Cursor is valid only while we write consecutive changed glyphs.
        let mut cursor_at: Option<u16> = None;
        for x in 0..next.width() {
            let glyph = next.get(x, y).unwrap_or_default();
            if prev.and_then(|p| p.get(x, y)) == Some(glyph) {
                cursor_at = None;
                continue;
            }
            if cursor_at != Some(x) {
                out.queue(cursor::MoveTo(x, y))?;
            }
            if current != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
            cursor_at = Some(x + 1);
        }
    }

    if current.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
