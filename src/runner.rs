//! The frame loop: tick, render, flush, check for a stop request.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::effects::Effect;
use crate::error::Result;
use crate::terminal::{TerminalDriver, TerminalSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunOptions {
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
    /// Ticks per second; 0 runs as fast as the host allows.
    pub ticks_per_second: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Quit,
    FrameLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub reason: StopReason,
}

/// Drives `effect` on `driver` until a quit request or the frame limit.
///
/// The terminal is restored on every exit path. A failed frame write ends
/// the loop with the error after cleanup; it is never retried.
pub fn run_effect<E: Effect, D: TerminalDriver>(
    effect: &mut E,
    driver: &mut D,
    options: RunOptions,
) -> Result<RunSummary> {
    let tick = (options.ticks_per_second > 0)
        .then(|| Duration::from_secs_f64(1.0 / options.ticks_per_second as f64));

    let mut session = TerminalSession::start(driver)?;
    let mut frame_buf = Vec::with_capacity(1024 * 64);
    let mut frames = 0u64;

    let reason = loop {
        if options.max_frames.is_some_and(|max| frames >= max) {
            break StopReason::FrameLimit;
        }
        let started = Instant::now();

        effect.update();
        frame_buf.clear();
        effect.render(&mut frame_buf)?;
        session.driver().write_frame(&frame_buf)?;
        frames += 1;

        if frames % 600 == 0 {
            debug!("{}", effect.status());
        }

        let wait = tick.map_or(Duration::ZERO, |t| t.saturating_sub(started.elapsed()));
        if session.driver().poll_quit(wait)? {
            break StopReason::Quit;
        }
    };

    session.finish()?;
    info!("stopped after {frames} frames ({reason:?}): {}", effect.status());
    Ok(RunSummary { frames, reason })
}
