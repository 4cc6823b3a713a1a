//! Terminal fireworks: a discrete-time particle simulation rasterized onto a
//! fixed character grid and printed with true-color ANSI escapes.
//!
//! Each frame clears the [`screen::Screen`], fires volleys on a schedule,
//! advances every [`particle::Particle`] and its trail, draws them, and
//! serializes the grid through [`render::Renderer`].

pub mod color;
pub mod config;
pub mod effects;
pub mod error;
pub mod firework;
pub mod particle;
pub mod render;
pub mod runner;
pub mod screen;
pub mod simulation;
pub mod terminal;

pub use config::Config;
pub use error::{Error, Result};
pub use simulation::Simulation;
