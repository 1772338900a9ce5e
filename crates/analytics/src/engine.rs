//! Aggregation engine.
//!
//! Applies each sale to both the cumulative tracker and the activity window,
//! and exposes the two read views.

use sales_core::{Config, ProductTotal, Result, Sale, TimestampSecs};
use tracing::{info, warn};

use crate::cumulative::CumulativeTracker;
use crate::window::ActivityWindow;

/// Owns both trackers; nothing else mutates them.
#[derive(Debug)]
pub struct AggregationEngine {
    /// All-time totals.
    cumulative: CumulativeTracker,
    /// Recent activity.
    window: ActivityWindow,
    /// Default threshold for `trending()`.
    trend_threshold: usize,
    /// Number of sales accepted.
    sales_ingested: u64,
    /// All-time revenue of accepted sales.
    total_revenue: f64,
}

impl AggregationEngine {
    /// Create a new engine from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_window(config.window.window_size_secs, config.window.trend_threshold)
    }

    /// Create a new engine with an explicit window length and trend threshold.
    pub fn with_window(window_size_secs: i64, trend_threshold: usize) -> Result<Self> {
        let window = ActivityWindow::new(window_size_secs)?;
        info!(window_size_secs, trend_threshold, "aggregation engine created");

        Ok(Self {
            cumulative: CumulativeTracker::new(),
            window,
            trend_threshold,
            sales_ingested: 0,
            total_revenue: 0.0,
        })
    }

    /// Apply a sale to both trackers.
    ///
    /// A sale failing validation is rejected before either tracker is touched.
    pub fn ingest(&mut self, sale: &Sale) -> Result<()> {
        if let Err(err) = sale.validate() {
            warn!(product = %sale.product_key, error = %err, "rejected sale");
            return Err(err);
        }

        self.cumulative.update(&sale.product_key, sale.quantity);
        self.window.record(&sale.product_key, sale.event_time);
        self.sales_ingested += 1;
        self.total_revenue += sale.revenue();
        Ok(())
    }

    /// Top `k` products by all-time quantity.
    pub fn top_products(&self, k: usize) -> Vec<ProductTotal> {
        self.cumulative.top_k(k)
    }

    /// Products trending at the configured threshold.
    pub fn trending(&self) -> Vec<String> {
        self.window.trending(self.trend_threshold)
    }

    /// Products trending at an explicit threshold.
    pub fn trending_with(&self, threshold: usize) -> Vec<String> {
        self.window.trending(threshold)
    }

    /// Age out window entries against a wall-clock reading.
    ///
    /// Opt-in; `ingest` only ever evicts relative to the newest sale.
    pub fn advance_clock(&mut self, now: TimestampSecs) -> usize {
        self.window.evict_expired(now)
    }

    /// Number of sales accepted so far.
    pub fn sales_ingested(&self) -> u64 {
        self.sales_ingested
    }

    /// All-time revenue (quantity x unit price) of accepted sales.
    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    /// Read access to the cumulative tracker.
    pub fn cumulative(&self) -> &CumulativeTracker {
        &self.cumulative
    }

    /// Read access to the activity window.
    pub fn window(&self) -> &ActivityWindow {
        &self.window
    }

    /// Clear all state.
    pub fn clear(&mut self) {
        self.cumulative.clear();
        self.window.clear();
        self.sales_ingested = 0;
        self.total_revenue = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::Error;

    fn make_sale(key: &str, quantity: u32, event_time: i64) -> Sale {
        Sale::new(key, "Phone", quantity, 799.0, event_time)
    }

    fn default_engine() -> AggregationEngine {
        AggregationEngine::new(&Config::default()).unwrap()
    }

    #[test]
    fn test_empty_engine_reads() {
        let engine = default_engine();
        assert!(engine.top_products(5).is_empty());
        assert!(engine.trending().is_empty());
        assert_eq!(engine.sales_ingested(), 0);
    }

    #[test]
    fn test_bad_window_config() {
        let mut config = Config::default();
        config.window.window_size_secs = 0;
        assert!(matches!(AggregationEngine::new(&config), Err(Error::Config(_))));
    }

    #[test]
    fn test_ingest_updates_both_views() {
        let mut engine = default_engine();
        for t in 0..5 {
            engine.ingest(&make_sale("iPhone 15", 2, t)).unwrap();
        }
        engine.ingest(&make_sale("iPad Pro", 4, 5)).unwrap();

        assert_eq!(
            engine.top_products(2),
            vec![
                ProductTotal::new("iPhone 15", 10),
                ProductTotal::new("iPad Pro", 4),
            ]
        );
        assert_eq!(engine.trending(), vec!["iPhone 15".to_string()]);
        assert_eq!(engine.window().count("iPad Pro"), 1);
        assert_eq!(engine.sales_ingested(), 6);
    }

    #[test]
    fn test_rejected_sale_leaves_state_untouched() {
        let mut engine = default_engine();
        engine.ingest(&make_sale("iPhone 15", 1, 0)).unwrap();

        assert!(engine.ingest(&make_sale("", 1, 1)).is_err());
        assert!(engine.ingest(&make_sale("iPhone 15", 0, 1)).is_err());

        assert_eq!(engine.cumulative().total("iPhone 15"), 1);
        assert_eq!(engine.cumulative().distinct_products(), 1);
        assert_eq!(engine.window().len(), 1);
        assert_eq!(engine.sales_ingested(), 1);
    }

    #[test]
    fn test_revenue_accumulates_accepted_sales_only() {
        let mut engine = default_engine();
        engine.ingest(&Sale::new("iPhone 15", "Phone", 2, 799.0, 0)).unwrap();
        engine.ingest(&Sale::new("HomePod Mini", "Smart Home", 3, 99.0, 1)).unwrap();
        assert!(engine.ingest(&Sale::new("HomePod Mini", "Smart Home", 0, 99.0, 2)).is_err());

        assert!((engine.total_revenue() - 1895.0).abs() < 1e-9);
        engine.clear();
        assert_eq!(engine.total_revenue(), 0.0);
    }

    #[test]
    fn test_window_slides_with_ingest() {
        let mut engine = AggregationEngine::with_window(10, 5).unwrap();
        for t in 0..5 {
            engine.ingest(&make_sale("X", 1, t)).unwrap();
        }
        assert_eq!(engine.trending(), vec!["X".to_string()]);

        engine.ingest(&make_sale("Y", 1, 12)).unwrap();
        assert_eq!(engine.window().count("X"), 3);
        assert!(engine.trending().is_empty());
        assert_eq!(engine.trending_with(3), vec!["X".to_string()]);

        // Cumulative totals never shrink.
        assert_eq!(engine.cumulative().total("X"), 5);
    }

    #[test]
    fn test_advance_clock() {
        let mut engine = default_engine();
        for t in 0..5 {
            engine.ingest(&make_sale("X", 1, t)).unwrap();
        }
        assert_eq!(engine.advance_clock(1_000), 5);
        assert!(engine.trending_with(1).is_empty());
        assert_eq!(engine.top_products(1), vec![ProductTotal::new("X", 5)]);
    }

    #[test]
    fn test_clear() {
        let mut engine = default_engine();
        engine.ingest(&make_sale("X", 1, 0)).unwrap();
        engine.clear();
        assert!(engine.top_products(1).is_empty());
        assert!(engine.window().is_empty());
        assert_eq!(engine.sales_ingested(), 0);
    }
}
