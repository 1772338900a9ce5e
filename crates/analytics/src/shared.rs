//! Shared engine handle for concurrent producers and readers.
//!
//! One mutex guards the whole engine, so a sale is applied to both trackers
//! under a single lock acquisition and readers never see it in one view only.

use parking_lot::Mutex;
use sales_core::{ProductTotal, Result, Sale, TimestampSecs};
use serde::Serialize;
use std::sync::Arc;

use crate::engine::AggregationEngine;

/// Point-in-time view of both trackers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub top_products: Vec<ProductTotal>,
    pub trending: Vec<String>,
    pub sales_ingested: u64,
    pub total_revenue: f64,
    pub latest_event_time: Option<TimestampSecs>,
}

/// Cloneable, thread-safe handle to an `AggregationEngine`.
#[derive(Debug, Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<AggregationEngine>>,
}

impl SharedEngine {
    pub fn new(engine: AggregationEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Apply a sale to both trackers under one lock.
    pub fn ingest(&self, sale: &Sale) -> Result<()> {
        self.inner.lock().ingest(sale)
    }

    pub fn top_products(&self, k: usize) -> Vec<ProductTotal> {
        self.inner.lock().top_products(k)
    }

    pub fn trending(&self) -> Vec<String> {
        self.inner.lock().trending()
    }

    /// Wall-clock eviction; see `AggregationEngine::advance_clock`.
    pub fn advance_clock(&self, now: TimestampSecs) -> usize {
        self.inner.lock().advance_clock(now)
    }

    /// Read both views under a single lock acquisition.
    pub fn snapshot(&self, k: usize) -> EngineSnapshot {
        let engine = self.inner.lock();
        EngineSnapshot {
            top_products: engine.top_products(k),
            trending: engine.trending(),
            sales_ingested: engine.sales_ingested(),
            total_revenue: engine.total_revenue(),
            latest_event_time: engine.window().latest_time(),
        }
    }

    /// Run a closure with read access to the engine.
    pub fn with_engine<T>(&self, f: impl FnOnce(&AggregationEngine) -> T) -> T {
        f(&self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::Config;
    use std::thread;

    fn make_shared() -> SharedEngine {
        SharedEngine::new(AggregationEngine::new(&Config::default()).unwrap())
    }

    #[test]
    fn test_concurrent_producers() {
        let shared = make_shared();
        let products = ["iPhone 15", "iPad Pro", "AirPods Pro", "HomePod Mini"];

        let handles: Vec<_> = products
            .iter()
            .map(|&product| {
                let shared = shared.clone();
                thread::spawn(move || {
                    for i in 0..250 {
                        let sale = Sale::new(product, "Misc", 2, 10.0, i);
                        shared.ingest(&sale).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = shared.snapshot(10);
        assert_eq!(snapshot.sales_ingested, 1_000);
        assert_eq!(snapshot.top_products.len(), 4);
        for row in &snapshot.top_products {
            assert_eq!(row.total_quantity, 500);
        }
        // Equal totals come back in key order.
        assert_eq!(snapshot.top_products[0].product_key, "AirPods Pro");
    }

    #[test]
    fn test_snapshot_is_consistent_with_views() {
        let shared = make_shared();
        for t in 0..6 {
            shared.ingest(&Sale::new("MacBook Air", "Laptop", 1, 999.0, t)).unwrap();
        }

        let snapshot = shared.snapshot(3);
        assert_eq!(snapshot.top_products, shared.top_products(3));
        assert_eq!(snapshot.trending, shared.trending());
        assert_eq!(snapshot.latest_event_time, Some(5));
        assert_eq!(shared.with_engine(|e| e.window().count("MacBook Air")), 6);
    }

    #[test]
    fn test_snapshot_serializes() {
        let shared = make_shared();
        shared.ingest(&Sale::new("iPad Mini", "Tablet", 3, 499.0, 1)).unwrap();

        let json = serde_json::to_string(&shared.snapshot(1)).unwrap();
        assert!(json.contains("\"product_key\":\"iPad Mini\""));
        assert!(json.contains("\"total_quantity\":3"));
        assert!(json.contains("\"total_revenue\":1497.0"));
    }

    #[test]
    fn test_shared_advance_clock() {
        let shared = make_shared();
        shared.ingest(&Sale::new("Apple TV 4K", "Media", 1, 129.0, 0)).unwrap();
        assert_eq!(shared.advance_clock(60), 1);
        assert_eq!(shared.snapshot(1).trending, Vec::<String>::new());
    }
}
