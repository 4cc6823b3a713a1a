//! Terminal control behind a small capability trait, plus a scoped session
//! guard that restores the terminal on every exit path.

use std::io::{self, BufWriter, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    style::{Attribute, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::warn;

pub trait TerminalDriver {
    /// Prepares the terminal: hide the cursor and clear once.
    fn enter(&mut self) -> io::Result<()>;

    /// Undoes `enter`: reset attributes and show the cursor.
    fn leave(&mut self) -> io::Result<()>;

    /// Writes one complete frame and flushes it.
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;

    /// Waits up to `timeout` for a quit request.
    fn poll_quit(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Row terminator the frame serializer should use.
    fn line_ending(&self) -> &'static str {
        "\n"
    }
}

/// Real terminal through crossterm, in raw mode on the alternate screen.
pub struct CrosstermTerminal {
    out: BufWriter<Stdout>,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self {
            out: BufWriter::with_capacity(1024 * 64, stdout()),
        }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDriver for CrosstermTerminal {
    fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        rollback_on_err(
            execute!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All)),
            terminal::disable_raw_mode,
        )
    }

    fn leave(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            SetAttribute(Attribute::Reset),
            Show,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.out.write_all(frame)?;
        self.out.flush()
    }

    fn poll_quit(&mut self, timeout: Duration) -> io::Result<bool> {
        if !event::poll(timeout)? {
            return Ok(false);
        }
        // Drain whatever else is queued so key repeats don't pile up.
        loop {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('q')
                    || key.code == KeyCode::Esc
                    || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    return Ok(true);
                }
            }
            if !event::poll(Duration::ZERO)? {
                return Ok(false);
            }
        }
    }

    // Raw mode turns off output post-processing, so "\n" alone won't return the carriage.
    fn line_ending(&self) -> &'static str {
        "\r\n"
    }
}

/// Runs `undo` when `result` failed, so a half-entered terminal is not left behind.
/// The original error wins over any failure of `undo`.
fn rollback_on_err<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    if result.is_err() {
        if let Err(err) = undo() {
            warn!("failed to undo partial terminal setup: {err}");
        }
    }
    result
}

/// Headless driver: counts what would have been written and never quits.
#[derive(Debug, Default)]
pub struct NullTerminal {
    pub entered: bool,
    pub left: bool,
    pub frames: u64,
    pub bytes: usize,
    pub last_frame: Vec<u8>,
}

impl TerminalDriver for NullTerminal {
    fn enter(&mut self) -> io::Result<()> {
        self.entered = true;
        Ok(())
    }

    fn leave(&mut self) -> io::Result<()> {
        self.left = true;
        Ok(())
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.frames += 1;
        self.bytes += frame.len();
        self.last_frame.clear();
        self.last_frame.extend_from_slice(frame);
        Ok(())
    }

    fn poll_quit(&mut self, _timeout: Duration) -> io::Result<bool> {
        Ok(false)
    }
}

/// Enters the terminal on creation and leaves it when finished or dropped,
/// including during a panic unwind.
pub struct TerminalSession<'a, D: TerminalDriver> {
    driver: &'a mut D,
    active: bool,
}

impl<'a, D: TerminalDriver> TerminalSession<'a, D> {
    pub fn start(driver: &'a mut D) -> io::Result<Self> {
        driver.enter()?;
        Ok(Self {
            driver,
            active: true,
        })
    }

    pub fn driver(&mut self) -> &mut D {
        &mut *self.driver
    }

    /// Leaves the terminal, reporting any failure instead of logging it.
    pub fn finish(mut self) -> io::Result<()> {
        self.active = false;
        self.driver.leave()
    }
}

impl<D: TerminalDriver> Drop for TerminalSession<'_, D> {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = self.driver.leave() {
                warn!("failed to restore terminal: {err}");
            }
        }
    }
}
