//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame, and any frame after a resize, is a full redraw. Later
//! frames only emit runs of glyphs that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// Last frame written to the terminal, `None` forces a full redraw.
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        queue!(
            self.buf,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.flush_buf()
    }

    /// Restore the terminal. Raw mode is disabled even if the write fails.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        queue!(
            self.buf,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode()?;
        flushed
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// After the call `fb` holds stale contents and can be rendered into again.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut prev = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut prev = stale.unwrap_or_else(|| FrameBuffer::new(0, 0));
                prev.resize(fb.width(), fb.height());
                prev
            }
        };
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear the screen and write every row of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;
    let mut enc = RunEncoder::new(out);
    for y in 0..fb.height() {
        enc.run(fb, 0, y, fb.width())?;
    }
    enc.finish()
}

/// Write only the runs of `next` that differ from `prev` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut enc = RunEncoder::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        enc.run(next, x, y, len)?;
    }
    enc.finish()
}

/// Emits glyph runs, sending only the style parts that changed since the
/// previous glyph.
struct RunEncoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<Style>,
}

impl<'a> RunEncoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn run(&mut self, fb: &FrameBuffer, x: u16, y: u16, len: u16) -> Result<()> {
        if len == 0 {
            return Ok(());
        }
        queue!(self.out, cursor::MoveTo(x, y))?;
        for gx in x..x.saturating_add(len) {
            let glyph = fb.get(gx, y).unwrap_or_default();
            self.set_style(glyph.style)?;
            queue!(self.out, Print(glyph.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, next: Style) -> Result<()> {
        let prev = self.style.replace(next);
        if prev == Some(next) {
            return Ok(());
        }
        if prev.map(|p| p.fg) != Some(next.fg) {
            queue!(self.out, SetForegroundColor(rgb_to_color(next.fg)))?;
        }
        if prev.map(|p| p.bg) != Some(next.bg) {
            queue!(self.out, SetBackgroundColor(rgb_to_color(next.bg)))?;
        }
        if prev.map(|p| (p.bold, p.dim)) != Some((next.bold, next.dim)) {
            // Bold and dim share one reset code.
            queue!(self.out, SetAttribute(Attribute::NormalIntensity))?;
            if next.bold {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            if next.dim {
                queue!(self.out, SetAttribute(Attribute::Dim))?;
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn rgb_to_color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Horizontal runs `(x, y, len)` of glyphs that differ. A size mismatch
/// marks every row dirty.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let (w, h) = (next.width(), next.height());
    if prev.width() != w || prev.height() != h {
        return (0..h).map(|y| (0, y, w)).collect();
    }

    let differs = |x, y| prev.get(x, y) != next.get(x, y);
    let mut runs = Vec::new();
    for y in 0..h {
        let mut x = 0;
        while x < w {
            if !differs(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && differs(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}
