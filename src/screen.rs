//! Fixed-size grid of pixels that particles are rasterized into each frame.

use crate::color::Pixel;

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    width: usize,
    height: usize,
    cells: Vec<Pixel>,
}

impl Screen {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Pixel::EMPTY; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Pixel] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    #[inline]
    fn idx(&self, col: i64, row: i64) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn get(&self, col: i64, row: i64) -> Option<Pixel> {
        self.idx(col, row).map(|i| self.cells[i])
    }

    /// Overwrites one cell. Out-of-bounds coordinates are ignored.
    pub fn set(&mut self, col: i64, row: i64, pixel: Pixel) {
        if let Some(i) = self.idx(col, row) {
            self.cells[i] = pixel;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Pixel::EMPTY);
    }
}
