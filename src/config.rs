//! Runtime configuration read from environment variables.

use std::env;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tick_tetris_input::DEFAULT_RELEASE_TIMEOUT_MS;
use tick_tetris_term::AnchorY;

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for the block generator; `None` picks one from the clock
    pub seed: Option<u32>,
    /// Terminal columns per board cell
    pub cell_w: u16,
    /// Held-key auto-release for terminals without release events
    pub release_timeout: Duration,
    pub anchor_y: AnchorY,
    /// Values that were set but could not be parsed, as `NAME=value`
    pub rejected: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            cell_w: 2,
            release_timeout: Duration::from_millis(DEFAULT_RELEASE_TIMEOUT_MS),
            anchor_y: AnchorY::Center,
            rejected: Vec::new(),
        }
    }
}

impl Config {
    /// Read `TICK_TETRIS_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any name → value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let mut rejected = Vec::new();
        let read = |name: &str| {
            let raw = lookup(name)?;
            let value = raw.trim().to_string();
            if value.is_empty() {
                return None;
            }
            Some((name.to_string(), value))
        };

        if let Some((name, v)) = read("TICK_TETRIS_SEED") {
            match v.parse() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => rejected.push(format!("{name}={v}")),
            }
        }
        if let Some((name, v)) = read("TICK_TETRIS_CELL_W") {
            match v.parse::<u16>() {
                Ok(w) if (1..=8).contains(&w) => config.cell_w = w,
                _ => rejected.push(format!("{name}={v}")),
            }
        }
        if let Some((name, v)) = read("TICK_TETRIS_RELEASE_MS") {
            match v.parse::<u64>() {
                Ok(ms) => config.release_timeout = Duration::from_millis(ms),
                Err(_) => rejected.push(format!("{name}={v}")),
            }
        }
        if let Some((name, v)) = read("TICK_TETRIS_ANCHOR") {
            match AnchorY::from_str(&v) {
                Some(anchor) => config.anchor_y = anchor,
                None => rejected.push(format!("{name}={v}")),
            }
        }

        config.rejected = rejected;
        config
    }

    /// Configured seed, or one derived from the system clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or(0);
            (nanos as u32) ^ ((nanos >> 32) as u32)
        })
    }
}
