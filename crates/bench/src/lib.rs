//! Benchmark harness for the sales analytics system.
//!
//! This crate provides:
//! - Heap-based top-K vs. full-sort baseline timing
//! - Throughput and per-sale latency metrics
//! - ASCII bar chart rendering of the results

pub mod benchmark;
pub mod metrics;
pub mod chart;

pub use benchmark::{full_sort_top_k, Benchmark, BenchmarkRow};
pub use metrics::BenchmarkSummary;
pub use chart::{make_bar, render_benchmark, render_graph};
