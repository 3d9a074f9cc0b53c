//! Host configuration: environment variables, overridden by CLI flags.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use crate::types::{DEFAULT_COLS, DEFAULT_ROWS, FALL_INTERVAL_MS};

/// Largest accepted board width or height
pub const MAX_BOARD_SIDE: u16 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub cols: u16,
    pub rows: u16,
    /// `None` picks a seed from the clock at startup
    pub seed: Option<u32>,
    /// Gravity interval in milliseconds
    pub fall_ms: u32,
    pub log_file: Option<PathBuf>,
    pub verbose: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            seed: None,
            fall_ms: FALL_INTERVAL_MS,
            log_file: None,
            verbose: 0,
        }
    }
}

impl GameConfig {
    /// Create from `HANDBLOCK_*` environment variables
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_file = lookup("HANDBLOCK_LOG_FILE")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            cols: parsed(&lookup, "HANDBLOCK_COLS").unwrap_or(defaults.cols),
            rows: parsed(&lookup, "HANDBLOCK_ROWS").unwrap_or(defaults.rows),
            seed: parsed(&lookup, "HANDBLOCK_SEED"),
            fall_ms: parsed(&lookup, "HANDBLOCK_FALL_MS").unwrap_or(defaults.fall_ms),
            log_file,
            verbose: defaults.verbose,
        }
    }

    /// Apply CLI overrides on top of this config
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(cols) = cli.cols {
            self.cols = cols;
        }
        if let Some(rows) = cli.rows {
            self.rows = rows;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(fall_ms) = cli.fall_ms {
            self.fall_ms = fall_ms;
        }
        if cli.log_file.is_some() {
            self.log_file = cli.log_file.clone();
        }
        self.verbose = self.verbose.max(cli.verbose);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.cols == 0 || self.rows == 0 {
            bail!(
                "board must have at least one column and one row (got {}x{})",
                self.cols,
                self.rows
            );
        }
        if self.cols > MAX_BOARD_SIDE || self.rows > MAX_BOARD_SIDE {
            bail!(
                "board is limited to {0}x{0} cells (got {1}x{2})",
                MAX_BOARD_SIDE,
                self.cols,
                self.rows
            );
        }
        if self.fall_ms == 0 {
            bail!("fall interval must be at least 1ms");
        }
        Ok(())
    }

    /// Log level for the `-v` count: info, then debug, then trace
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// The configured seed, or one derived from the clock
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

/// Trimmed, parsed value of `key`; `None` when unset or malformed
fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[derive(Debug, Parser)]
#[command(name = "handblock", about = "Falling-block puzzle in the terminal")]
pub struct Cli {
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (-v = DEBUG, -vv = TRACE)")]
    pub verbose: u8,

    #[arg(long, global = true, help = "Write logs to this file")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Board width in cells")]
    pub cols: Option<u16>,

    #[arg(long, global = true, help = "Board height in cells")]
    pub rows: Option<u16>,

    #[arg(long, global = true, help = "Seed for piece and color selection")]
    pub seed: Option<u32>,

    #[arg(long, global = true, help = "Gravity interval in milliseconds")]
    pub fall_ms: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Commands {
    /// Play in the terminal (default)
    Play,
    /// Apply a command script headlessly and print the final state as JSON
    Simulate {
        #[arg(
            long,
            value_delimiter = ',',
            help = "Comma-separated commands: left,right,down,rotate"
        )]
        commands: Vec<String>,

        #[arg(long, help = "Drop the piece until it locks after the script ends")]
        settle: bool,
    },
}
