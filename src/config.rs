//! Tunables for the simulation and the frame loop.
//!
//! `Config::default()` reproduces the classic 100x50 show.

use crate::color::Color;
use crate::firework::{Burst, Decay};
use crate::particle::Physics;

/// Sparse to dense; indexed by `round(size * 10)`.
pub const DEFAULT_GLYPHS: &str = " .-=+*oO0@#";

/// A burst color together with the per-tick fade its trails use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shade {
    pub color: Color,
    pub decay: Color,
}

impl Shade {
    pub const fn new(color: Color, decay: Color) -> Self {
        Self { color, decay }
    }
}

pub const DEFAULT_PALETTE: [Shade; 3] = [
    // yellow loses red, drifting to green
    Shade::new(Color::new(255, 255, 0), Color::new(10, 0, 0)),
    // magenta loses blue, drifting to red
    Shade::new(Color::new(255, 0, 255), Color::new(0, 0, 10)),
    // cyan loses green, drifting to blue
    Shade::new(Color::new(0, 255, 255), Color::new(0, 10, 0)),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub physics: Physics,
    pub decay: Decay,
    pub glyphs: Vec<char>,

    /// Ticks between recurring volleys.
    pub spawn_interval: u64,
    /// Recurring volleys only start once the frame counter passes this.
    pub warmup: u64,
    pub launch_columns: Vec<i64>,
    pub launch_rows: Vec<i64>,
    /// Launch positions get `0..launch_jitter` added on each axis.
    pub launch_jitter: i64,
    pub opening_site: (i64, i64),

    pub shell: Burst,
    pub companion: Burst,
    pub secondary: Burst,
    pub palette: Vec<Shade>,
    pub opening_shell_explosive: bool,
    pub recurring_shells_explosive: bool,

    /// Drop particles and trails once their size reaches zero.
    pub evict_dead: bool,
    pub seed: Option<u64>,
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
    /// Ticks per second; 0 runs unpaced.
    pub ticks_per_second: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 100,
            height: 50,
            physics: Physics::default(),
            decay: Decay::default(),
            glyphs: DEFAULT_GLYPHS.chars().collect(),
            spawn_interval: 25,
            warmup: 50,
            launch_columns: vec![75, 50, 25],
            launch_rows: vec![25, 40, 10],
            launch_jitter: 5,
            opening_site: (50, 25),
            shell: Burst {
                count: 10,
                velocity: 0.75,
                spread: 0.5,
            },
            companion: Burst {
                count: 10,
                velocity: 0.5,
                spread: 0.5,
            },
            secondary: Burst {
                count: 10,
                velocity: 0.4,
                spread: 0.5,
            },
            palette: DEFAULT_PALETTE.to_vec(),
            opening_shell_explosive: true,
            recurring_shells_explosive: false,
            evict_dead: true,
            seed: None,
            max_frames: None,
            ticks_per_second: 60,
        }
    }
}

impl Config {
    /// A small grid with no pacing, for tests and headless runs.
    pub fn headless(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ticks_per_second: 0,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.width,
                height: self.height,
            });
        }
        if self.glyphs.len() < 2 {
            return Err(ConfigError::GlyphRamp(self.glyphs.len()));
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.launch_columns.is_empty() || self.launch_rows.is_empty() {
            return Err(ConfigError::NoLaunchSites);
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if self.launch_jitter < 0 {
            return Err(ConfigError::Invalid {
                field: "launch_jitter",
                value: self.launch_jitter as f64,
            });
        }

        let floats = [
            ("gravity", self.physics.gravity),
            ("decay.size", self.decay.size),
            ("decay.rate", self.decay.rate),
            ("decay.trail_rate", self.decay.trail_rate),
            ("shell.velocity", self.shell.velocity),
            ("shell.spread", self.shell.spread),
            ("companion.velocity", self.companion.velocity),
            ("companion.spread", self.companion.spread),
            ("secondary.velocity", self.secondary.velocity),
            ("secondary.spread", self.secondary.spread),
        ];
        for (field, value) in floats {
            if !value.is_finite() {
                return Err(ConfigError::Invalid { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("screen must be at least 1x1, got {width}x{height}")]
    EmptyScreen { width: usize, height: usize },
    #[error("glyph ramp needs at least 2 glyphs, got {0}")]
    GlyphRamp(usize),
    #[error("palette is empty")]
    EmptyPalette,
    #[error("no launch sites configured")]
    NoLaunchSites,
    #[error("spawn interval must be at least one tick")]
    ZeroInterval,
    #[error("invalid value for {field}: {value}")]
    Invalid { field: &'static str, value: f64 },
}
