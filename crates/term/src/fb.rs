//! Framebuffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-glyph styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub fn glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// One terminal cell: a character and its style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Default for Glyph {
    fn default() -> Self {
        Style::default().glyph(' ')
    }
}

/// 2D grid of styled glyphs, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize in place, keeping the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.glyphs
            .resize(width as usize * height as usize, Glyph::default());
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.index(x, y).map(|i| self.glyphs[i])
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.index(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    pub fn clear(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: Style) {
        self.set(x, y, style.glyph(ch));
    }

    /// Write `s` left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: Style) {
        for (cx, ch) in (x..self.width).zip(s.chars()) {
            self.put_char(cx, y, ch, style);
        }
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: Style) {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (i, d) in digits[..len].iter().rev().enumerate() {
            self.put_char(x.saturating_add(i as u16), y, *d as char, style);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: Style) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Row `y` as text, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|g| g.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        fb.put_u32(1, 0, 4096, Style::default());
        assert_eq!(fb.row_text(0), " 4096       ");

        fb.put_u32(0, 0, 0, Style::default());
        assert_eq!(fb.get(0, 0).map(|g| g.ch), Some('0'));

        fb.put_u32(0, 0, u32::MAX, Style::default());
        assert_eq!(fb.row_text(0), "4294967295  ");
    }

    #[test]
    fn writes_are_clipped() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.put_str(2, 0, "HELLO", Style::default());
        fb.set(9, 9, Style::default().glyph('X'));
        assert_eq!(fb.row_text(0), "  HE");
        assert_eq!(fb.row_text(1), "    ");
    }

    #[test]
    fn resize_keeps_size_in_sync() {
        let mut fb = FrameBuffer::new(3, 3);
        fb.resize(5, 2);
        assert_eq!((fb.width(), fb.height()), (5, 2));
        assert_eq!(fb.glyphs().len(), 10);
    }
}
