//! Command-line arguments for the game binary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use tracing::Level;

use arena_tetris::core::SessionConfig;
use arena_tetris::types::{
    GameAction, DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_DROP_INTERVAL_MS, TICK_MS,
};

/// Falling-block arena game for the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Arena width in cells.
    #[arg(long, default_value_t = DEFAULT_ARENA_WIDTH)]
    pub width: u8,

    /// Arena height in cells.
    #[arg(long, default_value_t = DEFAULT_ARENA_HEIGHT)]
    pub height: u8,

    /// Piece sequence seed. Derived from the clock when omitted.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Milliseconds between gravity steps.
    #[arg(long, default_value_t = DEFAULT_DROP_INTERVAL_MS)]
    pub drop_interval_ms: u32,

    /// Milliseconds between frames.
    #[arg(long, default_value_t = TICK_MS)]
    pub tick_ms: u32,

    /// Run gravity only, without a terminal, and print the final state as JSON.
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to run in headless mode.
    #[arg(long, default_value_t = 600)]
    pub frames: u32,

    /// Headless actions, one per frame, e.g. `moveLeft,rotateCw,softDrop`.
    #[arg(long, value_delimiter = ',', value_parser = parse_action)]
    pub script: Vec<GameAction>,

    /// Write logs to this file. In terminal mode nothing is logged without it.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Most verbose level to log (error, warn, info, debug, trace).
    #[arg(long, default_value = "info")]
    pub log_level: Level,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            width: self.width,
            height: self.height,
            drop_interval_ms: self.drop_interval_ms,
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn parse_action(s: &str) -> Result<GameAction, String> {
    GameAction::from_str(s.trim()).ok_or_else(|| format!("unknown action `{s}`"))
}
