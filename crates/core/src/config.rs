//! Configuration structures for the sales analytics system.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};

/// Main configuration for the analytics system.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Activity window / trend detection configuration.
    pub window: WindowConfig,
    /// Best-seller ranking configuration.
    pub ranking: RankingConfig,
    /// Synthetic stream configuration.
    pub simulator: SimulatorConfig,
    /// Benchmark configuration.
    pub benchmark: BenchmarkConfig,
}

impl Config {
    /// Parse a JSON config. Missing sections and fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check every section, failing on the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;
        self.simulator.validate()?;
        self.benchmark.validate()?;
        Ok(())
    }
}

/// Trailing activity window configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window length in seconds. Must be > 0.
    pub window_size_secs: i64,
    /// Minimum in-window event count for a product to be trending.
    pub trend_threshold: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_size_secs: 10,
            trend_threshold: 5,
        }
    }
}

impl WindowConfig {
    pub fn validate(&self) -> Result<()> {
        if self.window_size_secs <= 0 {
            return Err(Error::config(format!(
                "window_size_secs must be > 0, got {}",
                self.window_size_secs
            )));
        }
        Ok(())
    }
}

/// Best-seller ranking configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Number of products shown in periodic reports.
    pub top_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { top_k: 5 }
    }
}

/// Synthetic sale stream configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Upper bound (inclusive) for the random quantity of a sale.
    pub max_quantity: u32,
    /// Number of sales to generate in a simulation run.
    pub event_count: usize,
    /// Delay between generated sales (ms).
    pub interval_ms: u64,
    /// Print a report every N ingested sales.
    pub report_every: usize,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_quantity: 3,
            event_count: 100,
            interval_ms: 100,
            report_every: 10,
        }
    }
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_quantity == 0 {
            return Err(Error::config("simulator.max_quantity must be >= 1"));
        }
        if self.report_every == 0 {
            return Err(Error::config("simulator.report_every must be >= 1"));
        }
        Ok(())
    }
}

/// Heap vs. full-sort benchmark configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Number of sales per benchmark run.
    pub sizes: Vec<usize>,
    /// K used for the top-K extraction.
    pub top_k: usize,
    /// RNG seed for the generated sales.
    pub seed: Option<u64>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 500, 1000, 2000, 5000],
            top_k: 5,
            seed: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::config("benchmark.sizes must not be empty"));
        }
        if self.sizes.contains(&0) {
            return Err(Error::config("benchmark.sizes must all be >= 1"));
        }
        Ok(())
    }
}
