mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use termfireworks::Config;
use termfireworks::effects::fireworks::FireworksEffect;
use termfireworks::runner::{RunOptions, run_effect};
use termfireworks::terminal::{CrosstermTerminal, NullTerminal, TerminalDriver};

use crate::cli::Cli;

fn run<D: TerminalDriver>(config: Config, mut driver: D) -> Result<()> {
    let options = RunOptions {
        max_frames: config.max_frames,
        ticks_per_second: config.ticks_per_second,
    };
    info!(
        "starting {}x{} show, seed {:?}, {} tps",
        config.width, config.height, config.seed, config.ticks_per_second
    );

    let mut effect = FireworksEffect::new(config, driver.line_ending())?;
    run_effect(&mut effect, &mut driver, options).context("fireworks display failed")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, away from the frame stream. RUST_LOG still wins.
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = cli.config();
    config.validate().context("invalid options")?;

    if cli.headless {
        if config.max_frames.is_none() {
            warn!("headless run without --frames never stops on its own");
        }
        run(config, NullTerminal::default())
    } else {
        run(config, CrosstermTerminal::new())
    }
}
