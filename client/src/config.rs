use std::{env, fs};

use anyhow::Context;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Config {
    pub rows: usize,
    pub cols: usize,
    pub min_alive: usize, // Live-cell placements on the random start grid.
    pub max_alive: usize,
    pub iterations: usize,
    pub frame_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows: 6,
            cols: 12,
            min_alive: 10,
            max_alive: 25,
            iterations: 1000,
            frame_delay_ms: 250,
        }
    }
}

impl Config {
    /// First CLI argument is an optional JSON config path; no argument means
    /// the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        let Some(config_path) = env::args().nth(1) else {
            return Ok(Self::default());
        };

        let config_serialized = fs::read(&config_path)
            .with_context(|| format!("Couldn't read config {config_path}"))?;

        serde_json::from_slice(&config_serialized)
            .with_context(|| format!("Couldn't deserialize config {config_path}"))
    }
}
