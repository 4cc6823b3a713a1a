use std::io;

use super::Effect;
use crate::config::Config;
use crate::error::Result;
use crate::render::Renderer;
use crate::simulation::Simulation;

pub struct FireworksEffect {
    sim: Simulation,
    renderer: Renderer,
}

impl FireworksEffect {
    /// `line_ending` comes from the terminal driver the frames are bound for.
    pub fn new(config: Config, line_ending: &'static str) -> Result<Self> {
        let renderer = Renderer::new(config.glyphs.clone(), line_ending);
        let sim = Simulation::new(config)?;
        Ok(Self { sim, renderer })
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }
}

impl Effect for FireworksEffect {
    fn update(&mut self) {
        self.sim.step();
    }

    fn render(&mut self, out: &mut Vec<u8>) -> io::Result<()> {
        self.renderer.render(self.sim.screen(), out)
    }

    fn status(&self) -> String {
        format!(
            "frame {}, {} particles, {} trails",
            self.sim.frame(),
            self.sim.particles().len(),
            self.sim.trails().len()
        )
    }
}
