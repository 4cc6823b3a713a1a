use clap::Parser;

use termfireworks::Config;

#[derive(Parser, Debug)]
#[command(name = "termfireworks")]
#[command(about = "Fireworks in your terminal. Press 'q', ESC, or Ctrl+C to exit", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Screen width in columns
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Screen height in rows
    #[arg(long, default_value_t = 50)]
    pub height: usize,

    /// Downward acceleration added to every particle each tick
    #[arg(long, default_value_t = 0.01)]
    pub gravity: f64,

    /// Ticks between recurring volleys
    #[arg(long, default_value_t = 25)]
    pub interval: u64,

    /// Seed for a reproducible show
    #[arg(long)]
    pub seed: Option<u64>,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Ticks per second (0 = as fast as possible)
    #[arg(long, default_value_t = 60)]
    pub tps: u32,

    /// Recurring shells detonate into secondary bursts too
    #[arg(long)]
    pub explosive: bool,

    /// Keep fully faded particles around instead of dropping them
    #[arg(long)]
    pub keep_dead: bool,

    /// Run without touching the terminal; frames are discarded
    #[arg(long)]
    pub headless: bool,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        let mut config = Config {
            width: self.width,
            height: self.height,
            spawn_interval: self.interval,
            seed: self.seed,
            max_frames: self.frames,
            ticks_per_second: self.tps,
            recurring_shells_explosive: self.explosive,
            evict_dead: !self.keep_dead,
            ..Config::default()
        };
        config.physics.gravity = self.gravity;
        config
    }
}
