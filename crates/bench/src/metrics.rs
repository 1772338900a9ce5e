//! Benchmark summary statistics.
//!
//! Aggregates per-size rows into means and standard deviations.

use serde::Serialize;
use statrs::statistics::Statistics;
use std::fmt;

use crate::benchmark::BenchmarkRow;

/// Summary across all benchmark sizes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BenchmarkSummary {
    /// Number of sizes run.
    pub runs: usize,
    /// Mean heap tracker time (ms).
    pub mean_heap_ms: f64,
    /// Std dev of heap tracker time (ms).
    pub std_heap_ms: f64,
    /// Mean full-sort time (ms).
    pub mean_sort_ms: f64,
    /// Std dev of full-sort time (ms).
    pub std_sort_ms: f64,
    /// Mean throughput (sales/sec).
    pub mean_throughput: f64,
    /// Std dev of throughput (sales/sec).
    pub std_throughput: f64,
    /// Whether every size produced matching rankings.
    pub all_match: bool,
}

impl BenchmarkSummary {
    /// Summarize benchmark rows.
    pub fn from_rows(rows: &[BenchmarkRow]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }

        let heap: Vec<f64> = rows.iter().map(|r| r.heap_ms).collect();
        let sort: Vec<f64> = rows.iter().map(|r| r.sort_ms).collect();
        let throughput: Vec<f64> = rows.iter().map(|r| r.throughput).collect();

        Self {
            runs: rows.len(),
            mean_heap_ms: heap.iter().mean(),
            std_heap_ms: sample_std_dev(&heap),
            mean_sort_ms: sort.iter().mean(),
            std_sort_ms: sample_std_dev(&sort),
            mean_throughput: throughput.iter().mean(),
            std_throughput: sample_std_dev(&throughput),
            all_match: rows.iter().all(|r| r.results_match),
        }
    }
}

/// Sample standard deviation, 0 for fewer than two values.
fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        0.0
    } else {
        values.iter().std_dev()
    }
}

impl fmt::Display for BenchmarkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Summary ({} runs) ---", self.runs)?;
        writeln!(
            f,
            "Heap tracker: {:.3} ms (± {:.3})",
            self.mean_heap_ms, self.std_heap_ms
        )?;
        writeln!(
            f,
            "Full sort:    {:.3} ms (± {:.3})",
            self.mean_sort_ms, self.std_sort_ms
        )?;
        writeln!(
            f,
            "Throughput:   {:.0} ops/sec (± {:.0})",
            self.mean_throughput, self.std_throughput
        )?;
        write!(
            f,
            "Rankings match: {}",
            if self.all_match { "yes" } else { "NO" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn make_row(heap_ms: f64, sort_ms: f64, throughput: f64) -> BenchmarkRow {
        BenchmarkRow {
            sale_count: 100,
            heap_ms,
            sort_ms,
            throughput,
            latency_us: heap_ms * 10.0,
            results_match: true,
        }
    }

    #[test]
    fn test_empty_rows() {
        let summary = BenchmarkSummary::from_rows(&[]);
        assert_eq!(summary.runs, 0);
        assert!(!summary.all_match);
    }

    #[test]
    fn test_single_row() {
        let summary = BenchmarkSummary::from_rows(&[make_row(2.0, 3.0, 50_000.0)]);
        assert_eq!(summary.runs, 1);
        assert_relative_eq!(summary.mean_heap_ms, 2.0);
        assert_relative_eq!(summary.std_heap_ms, 0.0);
        assert!(summary.all_match);
    }

    #[test]
    fn test_mean_and_std() {
        let rows = vec![
            make_row(1.0, 2.0, 100.0),
            make_row(2.0, 4.0, 200.0),
            make_row(3.0, 6.0, 300.0),
        ];
        let summary = BenchmarkSummary::from_rows(&rows);

        assert_relative_eq!(summary.mean_heap_ms, 2.0, epsilon = 1e-10);
        assert_relative_eq!(summary.mean_sort_ms, 4.0, epsilon = 1e-10);
        assert_relative_eq!(summary.mean_throughput, 200.0, epsilon = 1e-10);
        // Sample std dev of 1, 2, 3 is 1.
        assert_relative_eq!(summary.std_heap_ms, 1.0, epsilon = 1e-10);
        assert_relative_eq!(summary.std_throughput, 100.0, epsilon = 1e-10);
    }

    #[test]
    fn test_mismatch_reported() {
        let mut bad = make_row(1.0, 1.0, 1.0);
        bad.results_match = false;
        let summary = BenchmarkSummary::from_rows(&[make_row(1.0, 1.0, 1.0), bad]);
        assert!(!summary.all_match);
        assert!(summary.to_string().contains("Rankings match: NO"));
    }
}
