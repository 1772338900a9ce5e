//! Synthetic sale stream.
//!
//! Draws a uniformly random catalog product per sale with a random quantity
//! in `1..=max_quantity`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sales_core::config::SimulatorConfig;
use sales_core::{now_secs, Error, Result, Sale, TimestampSecs};
use tracing::debug;

use crate::catalog::Catalog;

/// Random sale generator over a fixed catalog.
pub struct SalesStreamSimulator {
    catalog: Catalog,
    rng: StdRng,
    max_quantity: u32,
    generated: u64,
}

impl SalesStreamSimulator {
    /// Create a simulator over `catalog`.
    ///
    /// Seeded runs are reproducible; `seed: None` draws from OS entropy.
    pub fn new(catalog: Catalog, config: &SimulatorConfig) -> Result<Self> {
        if catalog.is_empty() {
            return Err(Error::config("simulator catalog must not be empty"));
        }
        if config.max_quantity == 0 {
            return Err(Error::config("simulator.max_quantity must be >= 1"));
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        debug!(products = catalog.len(), seed = ?config.seed, "sales simulator created");

        Ok(Self {
            catalog,
            rng,
            max_quantity: config.max_quantity,
            generated: 0,
        })
    }

    /// Simulator over the default catalog.
    pub fn with_default_catalog(config: &SimulatorConfig) -> Result<Self> {
        Self::new(Catalog::default(), config)
    }

    /// Generate a sale stamped with `event_time`.
    pub fn generate_at(&mut self, event_time: TimestampSecs) -> Sale {
        let index = self.rng.gen_range(0..self.catalog.len());
        let quantity = self.rng.gen_range(1..=self.max_quantity);
        let entry = &self.catalog.entries()[index];
        self.generated += 1;

        Sale::new(
            entry.product_key.as_str(),
            entry.category.as_str(),
            quantity,
            entry.unit_price,
            event_time,
        )
    }

    /// Generate a sale stamped with the current wall-clock time.
    pub fn generate(&mut self) -> Sale {
        self.generate_at(now_secs())
    }

    /// Number of sales generated so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Iterator for SalesStreamSimulator {
    type Item = Sale;

    fn next(&mut self) -> Option<Sale> {
        Some(self.generate())
    }
}
