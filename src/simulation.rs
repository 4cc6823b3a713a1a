//! Simulation state: live particles, their trails and the screen they draw into.

use log::{debug, trace};

use crate::config::{Config, Shade};
use crate::error::Result;
use crate::firework::{Burst, Firework};
use crate::particle::{Detonation, Particle};
use crate::screen::Screen;

pub struct Simulation {
    config: Config,
    particles: Vec<Particle>,
    trails: Vec<Particle>,
    screen: Screen,
    rng: fastrand::Rng,
    frame: u64,
}

impl Simulation {
    /// Validates `config`, seeds the generator and fires the opening volley.
    pub fn new(config: Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let mut sim = Self::empty(config, rng)?;

        let site = sim.jittered(sim.config.opening_site);
        let explosive = sim.config.opening_shell_explosive;
        sim.launch_volley(site, explosive);
        Ok(sim)
    }

    /// A simulation with nothing in flight.
    pub fn empty(config: Config, rng: fastrand::Rng) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            screen: Screen::new(config.width, config.height),
            particles: Vec::with_capacity(256),
            trails: Vec::with_capacity(1024),
            config,
            rng,
            frame: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn trails(&self) -> &[Particle] {
        &self.trails
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn spawn(&mut self, firework: &Firework) {
        firework.spawn(&mut self.rng, &mut self.particles);
    }

    /// Advances one frame: volleys, physics, trails, then rasterization.
    pub fn step(&mut self) {
        self.frame += 1;
        self.screen.clear();

        if self.frame % self.config.spawn_interval == 0 && self.frame > self.config.warmup {
            let site = self.random_site();
            let explosive = self.config.recurring_shells_explosive;
            self.launch_volley(site, explosive);
        }

        // Detonations append to `particles`; those get their first tick in this same pass.
        let mut i = 0;
        while i < self.particles.len() {
            if let Some(detonation) = self.particles[i].update(&self.config.physics, &mut self.trails) {
                self.detonate(detonation);
            }
            i += 1;
        }
        for trail in &mut self.trails {
            trail.children_update();
        }

        for particle in &self.particles {
            particle.draw(&mut self.screen);
        }
        for trail in &self.trails {
            trail.draw(&mut self.screen);
        }

        // Dead particles still get their last draw this frame.
        if self.config.evict_dead {
            self.evict();
        }
    }

    fn evict(&mut self) {
        let before = (self.particles.len(), self.trails.len());
        self.particles.retain(|p| !p.is_dead());
        self.trails.retain(|p| !p.is_dead());
        trace!(
            "frame {}: evicted {} particles, {} trails",
            self.frame,
            before.0 - self.particles.len(),
            before.1 - self.trails.len()
        );
    }

    /// Shell and companion burst sharing one launch site.
    fn launch_volley(&mut self, (col, row): (i64, i64), explosive: bool) {
        let shell = self.firework(col as f64, row as f64, self.config.shell, explosive);
        let companion = self.firework(col as f64, row as f64, self.config.companion, false);
        debug!(
            "frame {}: volley at ({col}, {row}), explosive shell: {explosive}",
            self.frame
        );
        self.spawn(&shell);
        self.spawn(&companion);
    }

    fn detonate(&mut self, Detonation { x, y }: Detonation) {
        debug!("frame {}: shell detonated at ({x:.1}, {y:.1})", self.frame);
        let burst = self.firework(x, y, self.config.secondary, false);
        self.spawn(&burst);
    }

    fn firework(&mut self, x: f64, y: f64, burst: Burst, explosive: bool) -> Firework {
        let Shade { color, decay } = self.random_shade();
        Firework {
            x,
            y,
            burst,
            color,
            color_decay: decay,
            explosive,
            decay: self.config.decay,
        }
    }

    fn random_shade(&mut self) -> Shade {
        self.config.palette[self.rng.usize(..self.config.palette.len())]
    }

    fn random_site(&mut self) -> (i64, i64) {
        let col = self.config.launch_columns[self.rng.usize(..self.config.launch_columns.len())];
        let row = self.config.launch_rows[self.rng.usize(..self.config.launch_rows.len())];
        self.jittered((col, row))
    }

    fn jittered(&mut self, (col, row): (i64, i64)) -> (i64, i64) {
        let jitter = self.config.launch_jitter;
        if jitter <= 0 {
            return (col, row);
        }
        (col + self.rng.i64(0..jitter), row + self.rng.i64(0..jitter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, Pixel};
    use crate::config::ConfigError;
    use crate::firework::Decay;

    fn seeded(config: Config) -> Simulation {
        Simulation::new(Config {
            seed: Some(1234),
            ..config
        })
        .expect("valid config")
    }

    #[test]
    fn opening_volley_spawns_shell_and_companion() {
        let sim = seeded(Config::default());
        assert_eq!(sim.frame(), 0);
        assert_eq!(sim.particles().len(), 20);
        assert!(sim.trails().is_empty());

        let (shell, companion) = sim.particles().split_at(10);
        assert!(shell.iter().all(|p| p.explosive));
        assert!(companion.iter().all(|p| !p.explosive));
        for p in sim.particles() {
            assert!((50.0..55.0).contains(&p.x));
            assert!((25.0..30.0).contains(&p.y));
        }
    }

    #[test]
    fn recurring_volleys_follow_schedule() {
        let mut config = Config::headless(100, 50);
        config.opening_shell_explosive = false;
        config.evict_dead = false;
        let mut sim = seeded(config);

        let mut counts = Vec::new();
        for _ in 0..100 {
            let before = sim.particles().len();
            sim.step();
            counts.push((sim.frame(), sim.particles().len() - before));
        }
        let volleys: Vec<u64> = counts
            .iter()
            .filter(|(_, added)| *added > 0)
            .map(|(frame, _)| *frame)
            .collect();
        assert_eq!(volleys, vec![75, 100]);
        assert!(counts.iter().all(|(_, added)| *added == 0 || *added == 20));
    }

    #[test]
    fn shell_detonation_adds_secondary_burst() {
        let mut config = Config::headless(100, 50);
        config.evict_dead = false;
        let mut sim = seeded(config);

        // Size 0.9 hits index 2 after 33..=37 ticks of 0.02 decay.
        for _ in 0..40 {
            sim.step();
        }
        assert_eq!(sim.particles().len(), 20 + 10 * 10);
        assert!(sim.particles()[..10].iter().all(|p| p.did_explode));
        assert!(sim.particles()[20..].iter().all(|p| !p.explosive));
    }

    #[test]
    fn every_trail_comes_from_a_cell_crossing() {
        let config = Config {
            physics: crate::particle::Physics {
                gravity: 0.0,
                detonation_index: 2,
            },
            evict_dead: false,
            ..Config::headless(100, 50)
        };
        let mut sim = Simulation::empty(config, fastrand::Rng::with_seed(5)).expect("valid config");
        sim.particles.push(Particle {
            x: 10.0,
            y: 10.0,
            vx: 0.5,
            vy: 0.0,
            decay_rate: 0.0,
            children_decay_rate: 0.1,
            color_decay: Color::new(1, 1, 1),
            pixel: Pixel::new(0.9, Color::new(200, 200, 200)),
            explosive: false,
            did_explode: false,
        });
        for _ in 0..10 {
            sim.step();
        }
        // x: 10.0 -> 15.0 crosses five cell boundaries.
        assert_eq!(sim.trails().len(), 5);
        let cells: Vec<_> = sim.trails().iter().map(|t| t.cell()).collect();
        assert_eq!(cells, vec![(11, 10), (12, 10), (13, 10), (14, 10), (15, 10)]);
    }

    #[test]
    fn eviction_drops_dead_particles() {
        let config = Config {
            opening_shell_explosive: false,
            ..Config::headless(100, 50)
        };
        let mut sim = seeded(config);
        // 0.9 / 0.02 = 45 ticks until every primary is gone; trails last less.
        for _ in 0..49 {
            sim.step();
        }
        assert!(sim.particles().is_empty());
        assert!(sim.trails().is_empty());
        assert!(sim.screen().cells().iter().all(|p| *p == Pixel::EMPTY));
    }

    #[test]
    fn dying_trail_draws_before_eviction() {
        let mut sim = Simulation::empty(Config::headless(10, 10), fastrand::Rng::with_seed(3))
            .expect("valid config");
        let red = Particle {
            x: 5.5,
            y: 5.5,
            vx: 0.0,
            vy: 0.0,
            decay_rate: 0.0,
            children_decay_rate: 0.04,
            color_decay: Color::BLACK,
            pixel: Pixel::new(0.9, Color::new(255, 0, 0)),
            explosive: false,
            did_explode: false,
        };
        let blue = Particle {
            decay_rate: 0.04,
            pixel: Pixel::new(0.01, Color::new(0, 0, 255)),
            ..red.clone()
        };
        sim.particles.push(red);
        sim.trails.push(blue);

        sim.step();

        // The trail is drawn after the primary and owns the cell on its last frame.
        let cell = sim.screen().get(5, 5).expect("in bounds");
        assert_eq!(cell.color, Color::new(0, 0, 255));
        assert!(sim.trails().is_empty());
        assert_eq!(sim.particles().len(), 1);

        sim.step();
        let cell = sim.screen().get(5, 5).expect("in bounds");
        assert_eq!(cell.color, Color::new(255, 0, 0));
    }

    #[test]
    fn invalid_config_surfaces_as_config_error() {
        let config = Config {
            palette: Vec::new(),
            ..Config::headless(10, 10)
        };
        assert!(matches!(
            Simulation::new(config),
            Err(crate::error::Error::Config(ConfigError::EmptyPalette))
        ));
    }

    #[test]
    fn step_rasterizes_live_particles() {
        let mut sim = Simulation::empty(Config::headless(20, 10), fastrand::Rng::with_seed(9))
            .expect("valid config");
        sim.spawn(&Firework {
            x: 10.0,
            y: 5.0,
            burst: Burst {
                count: 4,
                velocity: 1.0,
                spread: 0.0,
            },
            color: Color::new(0, 255, 255),
            color_decay: Color::new(0, 10, 0),
            explosive: false,
            decay: Decay::default(),
        });
        sim.step();

        let lit = sim.screen().cells().iter().filter(|p| p.size > 0.0).count();
        assert!(lit >= 4, "only {lit} cells lit");
        // Trails land on the same cells after the primaries and fade first.
        let right = sim.screen().get(11, 5).expect("in bounds");
        assert!(right.size > 0.0);
        assert_eq!(right.color, Color::new(0, 245, 255));
    }

    #[test]
    fn same_seed_same_show() {
        let mut a = seeded(Config::headless(100, 50));
        let mut b = seeded(Config::headless(100, 50));
        for _ in 0..120 {
            a.step();
            b.step();
        }
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.trails(), b.trails());
        assert_eq!(a.screen(), b.screen());
    }
}
