//! Colors and the per-cell pixel a particle leaves on the screen.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel subtraction that stops at 0 instead of wrapping to 255.
    pub fn fade(self, decay: Color) -> Color {
        Color {
            r: self.r.saturating_sub(decay.r),
            g: self.g.saturating_sub(decay.g),
            b: self.b.saturating_sub(decay.b),
        }
    }
}

/// What a single screen cell shows for one frame.
///
/// `size` is a glyph-density proxy: nominally in `0.0..=1.0`, it is only
/// range-checked when a glyph gets picked for it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pixel {
    pub size: f64,
    pub color: Color,
}

impl Pixel {
    pub const EMPTY: Pixel = Pixel {
        size: 0.0,
        color: Color::BLACK,
    };

    pub const fn new(size: f64, color: Color) -> Self {
        Self { size, color }
    }
}
