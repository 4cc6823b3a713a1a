//! Error types for the fireworks runtime.

use std::io;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum Error {
    /// Terminal write failed. Fatal: the frame loop stops and cleans up.
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
