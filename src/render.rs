//! Serializes a [`Screen`] into one block of true-color ANSI text.

use std::io::Write;

use crate::color::Color;
use crate::screen::Screen;

pub const CURSOR_HOME: &[u8] = b"\x1b[0;0H";

/// Index into a ramp of `len` glyphs for a pixel of the given size.
///
/// Non-positive sizes map to the first (blank) glyph and anything above 1.0
/// to the last, so every size lands on a valid glyph.
pub fn glyph_index(size: f64, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if size <= 0.0 {
        0
    } else if size <= 1.0 {
        ((size * last as f64).round() as usize).min(last)
    } else {
        last
    }
}

pub struct Renderer {
    glyphs: Vec<char>,
    line_ending: &'static str,
}

impl Renderer {
    pub fn new(glyphs: Vec<char>, line_ending: &'static str) -> Self {
        Self {
            glyphs,
            line_ending,
        }
    }

    /// Glyph for `size`; an empty ramp renders everything blank.
    pub fn glyph(&self, size: f64) -> char {
        self.glyphs
            .get(glyph_index(size, self.glyphs.len()))
            .copied()
            .unwrap_or(' ')
    }

    /// Appends one frame to `out`: cursor home, then every row top to bottom,
    /// each cell as a foreground color escape followed by its glyph.
    pub fn render(&self, screen: &Screen, out: &mut Vec<u8>) -> std::io::Result<()> {
        out.extend_from_slice(CURSOR_HOME);
        for row in screen.rows() {
            for pixel in row {
                let Color { r, g, b } = pixel.color;
                write!(out, "\x1b[38;2;{r};{g};{b}m{}", self.glyph(pixel.size))?;
            }
            out.extend_from_slice(self.line_ending.as_bytes());
        }
        Ok(())
    }
}
