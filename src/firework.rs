//! Radial burst generator.

use std::f64::consts::PI;

use crate::color::{Color, Pixel};
use crate::particle::Particle;

/// Shape of a burst: how many particles and how fast they leave the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Burst {
    pub count: usize,
    pub velocity: f64,
    /// Upper bound of the random angular offset added to each direction.
    pub spread: f64,
}

/// Starting size and decay rates every spawned particle gets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    pub size: f64,
    pub rate: f64,
    pub trail_rate: f64,
}

impl Default for Decay {
    fn default() -> Self {
        Self {
            size: 0.9,
            rate: 0.02,
            trail_rate: 0.04,
        }
    }
}

/// One burst, alive only for the duration of [`Firework::spawn`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Firework {
    pub x: f64,
    pub y: f64,
    pub burst: Burst,
    pub color: Color,
    pub color_decay: Color,
    pub explosive: bool,
    pub decay: Decay,
}

impl Firework {
    /// Appends `burst.count` particles evenly spaced around the origin.
    ///
    /// Particle `i` heads along `2πi/count` plus a jitter drawn from
    /// `[0, spread)`.
    pub fn spawn(&self, rng: &mut fastrand::Rng, particles: &mut Vec<Particle>) {
        let Burst {
            count,
            velocity,
            spread,
        } = self.burst;
        particles.reserve(count);

        for i in 0..count {
            let angle = i as f64 * (2.0 * PI / count as f64) + rng.f64() * spread;
            particles.push(Particle {
                x: self.x,
                y: self.y,
                vx: angle.cos() * velocity,
                vy: angle.sin() * velocity,
                decay_rate: self.decay.rate,
                children_decay_rate: self.decay.trail_rate,
                color_decay: self.color_decay,
                pixel: Pixel::new(self.decay.size, self.color),
                explosive: self.explosive,
                did_explode: false,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn firework(count: usize, spread: f64) -> Firework {
        Firework {
            x: 50.0,
            y: 25.0,
            burst: Burst {
                count,
                velocity: 1.0,
                spread,
            },
            color: Color::new(255, 0, 255),
            color_decay: Color::new(0, 0, 10),
            explosive: false,
            decay: Decay::default(),
        }
    }

    #[test]
    fn four_way_burst_points_along_axes() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut particles = Vec::new();
        firework(4, 0.0).spawn(&mut rng, &mut particles);

        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        assert_eq!(particles.len(), 4);
        for (p, (vx, vy)) in particles.iter().zip(expected) {
            assert!((p.vx - vx).abs() < 1e-9, "{} vs {}", p.vx, vx);
            assert!((p.vy - vy).abs() < 1e-9, "{} vs {}", p.vy, vy);
            assert_eq!((p.x, p.y), (50.0, 25.0));
            assert_eq!(p.pixel, Pixel::new(0.9, Color::new(255, 0, 255)));
            assert_eq!(p.decay_rate, 0.02);
            assert_eq!(p.children_decay_rate, 0.04);
            assert!(!p.did_explode);
        }
    }

    #[test]
    fn zero_count_spawns_nothing() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut particles = Vec::new();
        firework(0, 0.5).spawn(&mut rng, &mut particles);
        assert!(particles.is_empty());
    }

    #[test]
    fn jitter_stays_within_spread() {
        let mut rng = fastrand::Rng::with_seed(42);
        let mut particles = Vec::new();
        let count = 10;
        let spread = 0.5;
        firework(count, spread).spawn(&mut rng, &mut particles);

        for (i, p) in particles.iter().enumerate() {
            let base = i as f64 * 2.0 * PI / count as f64;
            let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
            assert!((speed - 1.0).abs() < 1e-9);
            // Angle difference normalised into [0, 2π).
            let offset = (p.vy.atan2(p.vx) - base).rem_euclid(2.0 * PI);
            assert!(
                offset < spread + 1e-9 || offset > 2.0 * PI - 1e-9,
                "particle {i} offset {offset}"
            );
        }
    }

    #[test]
    fn same_seed_same_burst() {
        let fw = firework(10, 0.5);
        let mut a = Vec::new();
        let mut b = Vec::new();
        fw.spawn(&mut fastrand::Rng::with_seed(3), &mut a);
        fw.spawn(&mut fastrand::Rng::with_seed(3), &mut b);
        assert_eq!(a, b);
    }
}
