//! Moving, decaying points and the fading trails they leave behind.

use crate::color::{Color, Pixel};
use crate::screen::Screen;

/// World constants a particle needs for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    /// Added to vertical velocity every tick. Screen y grows downward.
    pub gravity: f64,
    /// Shells detonate on the tick where `round(size * 10)` equals this.
    pub detonation_index: i64,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: 0.01,
            detonation_index: 2,
        }
    }
}

/// Where a shell blew up. The simulation turns this into a secondary burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detonation {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Per-tick shrink of `pixel.size`.
    pub decay_rate: f64,
    /// Decay rate handed to the trail copies this particle drops.
    pub children_decay_rate: f64,
    /// Per-channel per-tick subtraction, applied to trails only.
    pub color_decay: Color,
    pub pixel: Pixel,
    /// Shell flag: detonates into a secondary burst once.
    pub explosive: bool,
    pub did_explode: bool,
}

impl Particle {
    /// Grid cell the particle currently falls into. Truncates toward zero.
    #[inline]
    pub fn cell(&self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }

    pub fn is_dead(&self) -> bool {
        self.pixel.size <= 0.0
    }

    /// Advances one tick of motion.
    ///
    /// Drops a trail copy into `trails` whenever the particle enters a new
    /// grid cell, and reports a detonation the first time an explosive shell
    /// decays to the trigger size.
    pub fn update(&mut self, physics: &Physics, trails: &mut Vec<Particle>) -> Option<Detonation> {
        let old_cell = self.cell();

        self.x += self.vx;
        self.y += self.vy;
        self.vy += physics.gravity;
        self.pixel.size -= self.decay_rate;

        if self.cell() != old_cell {
            let mut trail = self.clone();
            trail.decay_rate = self.children_decay_rate;
            trails.push(trail);
        }

        if self.explosive
            && !self.did_explode
            && (self.pixel.size * 10.0).round() as i64 == physics.detonation_index
        {
            self.did_explode = true;
            return Some(Detonation {
                x: self.x,
                y: self.y,
            });
        }

        None
    }

    /// Trail tick: shrinks and fades in place.
    pub fn children_update(&mut self) {
        self.pixel.size -= self.decay_rate;
        self.pixel.color = self.pixel.color.fade(self.color_decay);
    }

    /// Writes the current pixel into the screen cell under the particle.
    pub fn draw(&self, screen: &mut Screen) {
        let (col, row) = self.cell();
        screen.set(col, row, self.pixel);
    }
}
