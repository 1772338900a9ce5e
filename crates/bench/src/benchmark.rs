//! Heap tracker vs. full-sort benchmark.
//!
//! For each configured size, generates that many sales, then times the
//! cumulative tracker (ingest + bounded-heap top-K) against a baseline that
//! aggregates into a map and sorts every product.

use sales_analytics::CumulativeTracker;
use sales_core::config::{BenchmarkConfig, SimulatorConfig};
use sales_core::{ProductTotal, Result, Sale};
use sales_ingestion::SalesStreamSimulator;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of one benchmark size.
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkRow {
    /// Number of sales processed.
    pub sale_count: usize,
    /// Heap tracker time, ingest plus top-K (ms).
    pub heap_ms: f64,
    /// Full-sort baseline time (ms).
    pub sort_ms: f64,
    /// Heap tracker throughput (sales/sec).
    pub throughput: f64,
    /// Heap tracker latency per sale (µs).
    pub latency_us: f64,
    /// Whether both approaches returned the same ranking.
    pub results_match: bool,
}

/// Baseline top-K: aggregate, sort every product, truncate.
///
/// Uses the same ordering as the tracker: total descending, key ascending.
pub fn full_sort_top_k(sales: &[Sale], k: usize) -> Vec<ProductTotal> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for sale in sales {
        *totals.entry(sale.product_key.as_str()).or_insert(0) += sale.quantity as u64;
    }

    let mut rows: Vec<ProductTotal> = totals
        .into_iter()
        .map(|(key, total)| ProductTotal::new(key, total))
        .collect();
    rows.sort_by(|a, b| {
        b.total_quantity
            .cmp(&a.total_quantity)
            .then_with(|| a.product_key.cmp(&b.product_key))
    });
    rows.truncate(k);
    rows
}

/// Benchmark runner.
pub struct Benchmark;

impl Benchmark {
    /// Run every configured size.
    pub fn run(config: &BenchmarkConfig) -> Result<Vec<BenchmarkRow>> {
        config.validate()?;
        info!(sizes = ?config.sizes, top_k = config.top_k, "running benchmark");

        let mut rows = Vec::with_capacity(config.sizes.len());
        for (i, &size) in config.sizes.iter().enumerate() {
            let sim_config = SimulatorConfig {
                seed: config.seed.map(|s| s.wrapping_add(i as u64)),
                ..SimulatorConfig::default()
            };
            let mut simulator = SalesStreamSimulator::with_default_catalog(&sim_config)?;
            let sales: Vec<Sale> = (0..size).map(|t| simulator.generate_at(t as i64)).collect();

            let row = Self::run_size(&sales, config.top_k);
            if !row.results_match {
                warn!(size, "heap and full-sort rankings differ");
            }
            rows.push(row);
        }
        Ok(rows)
    }

    /// Time both approaches over one batch of sales.
    pub fn run_size(sales: &[Sale], k: usize) -> BenchmarkRow {
        let start_heap = Instant::now();
        let mut tracker = CumulativeTracker::new();
        for sale in sales {
            tracker.update(&sale.product_key, sale.quantity);
        }
        let heap_top = tracker.top_k(k);
        let heap_ms = start_heap.elapsed().as_secs_f64() * 1000.0;

        let start_sort = Instant::now();
        let sort_top = full_sort_top_k(sales, k);
        let sort_ms = start_sort.elapsed().as_secs_f64() * 1000.0;

        let sale_count = sales.len();
        let seconds = heap_ms / 1000.0;
        let throughput = if seconds > 0.0 {
            sale_count as f64 / seconds
        } else {
            0.0
        };
        let latency_us = if sale_count > 0 {
            heap_ms * 1000.0 / sale_count as f64
        } else {
            0.0
        };

        debug!(sale_count, heap_ms, sort_ms, "benchmark size done");

        BenchmarkRow {
            sale_count,
            heap_ms,
            sort_ms,
            throughput,
            latency_us,
            results_match: heap_top == sort_top,
        }
    }
}
