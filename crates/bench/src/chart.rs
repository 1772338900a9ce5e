//! ASCII bar charts for benchmark output.

use std::fmt::Write;

use crate::benchmark::BenchmarkRow;

/// Longest bar drawn, in characters.
pub const MAX_BAR_LEN: usize = 80;

/// A bar of `|` proportional to `value * scale`, clamped to `MAX_BAR_LEN`.
pub fn make_bar(value: f64, scale: f64) -> String {
    let scaled = value * scale;
    // NaN and non-positive values draw nothing; +inf clamps like any overflow.
    let length = if scaled > 0.0 {
        scaled.min(MAX_BAR_LEN as f64) as usize
    } else {
        0
    };
    "|".repeat(length)
}

/// Render one labelled graph, a row per x value.
pub fn render_graph(label: &str, xs: &[usize], ys: &[f64], scale: f64, unit: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n--- {label} ---");
    for (x, &y) in xs.iter().zip(ys) {
        let _ = writeln!(out, "{x}: {y:>8.2} {unit} {}", make_bar(y, scale));
    }
    out
}

/// Render heap time, sort time, throughput and latency graphs.
pub fn render_benchmark(rows: &[BenchmarkRow]) -> String {
    let sizes: Vec<usize> = rows.iter().map(|r| r.sale_count).collect();
    let heap: Vec<f64> = rows.iter().map(|r| r.heap_ms).collect();
    let sort: Vec<f64> = rows.iter().map(|r| r.sort_ms).collect();
    let throughput: Vec<f64> = rows.iter().map(|r| r.throughput).collect();
    let latency: Vec<f64> = rows.iter().map(|r| r.latency_us).collect();

    let mut out = String::new();
    out.push_str(&render_graph("Heap Tracker Time", &sizes, &heap, 2.0, "ms"));
    out.push_str(&render_graph("Full Sort Time", &sizes, &sort, 2.0, "ms"));
    out.push_str(&render_graph("Throughput", &sizes, &throughput, 0.01, "ops/sec"));
    out.push_str(&render_graph("Latency", &sizes, &latency, 0.05, "μs"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_bar() {
        assert_eq!(make_bar(5.0, 1.0), "|||||");
        assert_eq!(make_bar(2.6, 2.0), "|||||");
        assert_eq!(make_bar(0.0, 1.0), "");
        assert_eq!(make_bar(-3.0, 1.0), "");
        assert_eq!(make_bar(f64::NAN, 1.0), "");
    }

    #[test]
    fn test_make_bar_clamped() {
        assert_eq!(make_bar(1_000_000.0, 1.0).len(), MAX_BAR_LEN);
        assert_eq!(make_bar(f64::INFINITY, 1.0).len(), MAX_BAR_LEN);
        assert_eq!(make_bar(1.0, f64::INFINITY).len(), MAX_BAR_LEN);
        assert_eq!(make_bar(f64::NEG_INFINITY, 1.0).len(), 0);
        assert_eq!(make_bar(f64::NAN, 1.0).len(), 0);
    }

    #[test]
    fn test_render_graph_layout() {
        let out = render_graph("Heap Tracker Time", &[100, 500], &[1.5, 3.0], 2.0, "ms");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "--- Heap Tracker Time ---");
        assert_eq!(lines[2], "100:     1.50 ms |||");
        assert_eq!(lines[3], "500:     3.00 ms ||||||");
    }

    #[test]
    fn test_render_benchmark_sections() {
        let rows = vec![BenchmarkRow {
            sale_count: 100,
            heap_ms: 0.5,
            sort_ms: 0.7,
            throughput: 200_000.0,
            latency_us: 5.0,
            results_match: true,
        }];
        let out = render_benchmark(&rows);
        for label in ["Heap Tracker Time", "Full Sort Time", "Throughput", "Latency"] {
            assert!(out.contains(&format!("--- {label} ---")));
        }
        // 200000 * 0.01 = 2000, clamped.
        assert!(out.contains(&"|".repeat(MAX_BAR_LEN)));
    }
}
