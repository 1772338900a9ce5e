//! All-time best-seller tracking.
//!
//! Keeps a running quantity total per product and answers top-K queries with a
//! size-bounded min-heap, so extraction is O(n log k) over n distinct products.

use sales_core::ProductTotal;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use tracing::debug;

/// Heap entry ranked by total, then by key.
///
/// `Greater` means a better rank: a higher total, or for equal totals the
/// lexicographically smaller key.
#[derive(Debug, PartialEq, Eq)]
struct Ranked<'a> {
    total: u64,
    key: &'a str,
}

impl Ord for Ranked<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total
            .cmp(&other.total)
            .then_with(|| other.key.cmp(self.key))
    }
}

impl PartialOrd for Ranked<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Cumulative quantity tracker.
#[derive(Debug, Default)]
pub struct CumulativeTracker {
    /// Total quantity sold, by product key.
    totals: HashMap<String, u64>,
}

impl CumulativeTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` to the running total for `product_key`.
    ///
    /// The caller guarantees a non-empty key and `quantity >= 1`.
    pub fn update(&mut self, product_key: &str, quantity: u32) {
        match self.totals.get_mut(product_key) {
            Some(total) => *total += quantity as u64,
            None => {
                self.totals.insert(product_key.to_string(), quantity as u64);
            }
        }
    }

    /// All-time total for a product (0 if never seen).
    pub fn total(&self, product_key: &str) -> u64 {
        self.totals.get(product_key).copied().unwrap_or(0)
    }

    /// Number of distinct products seen.
    pub fn distinct_products(&self) -> usize {
        self.totals.len()
    }

    /// Top `k` products by total quantity, descending, ties by key ascending.
    ///
    /// Returns `min(k, distinct_products())` rows.
    pub fn top_k(&self, k: usize) -> Vec<ProductTotal> {
        if k == 0 || self.totals.is_empty() {
            return Vec::new();
        }

        // Min-heap: the root is always the weakest of the current candidates.
        let mut heap: BinaryHeap<Reverse<Ranked<'_>>> =
            BinaryHeap::with_capacity(k.min(self.totals.len()) + 1);

        for (key, &total) in &self.totals {
            heap.push(Reverse(Ranked {
                total,
                key: key.as_str(),
            }));
            if heap.len() > k {
                heap.pop();
            }
        }

        let mut result = Vec::with_capacity(heap.len());
        while let Some(Reverse(entry)) = heap.pop() {
            result.push(ProductTotal::new(entry.key, entry.total));
        }
        result.reverse();

        debug!(
            k,
            distinct = self.totals.len(),
            returned = result.len(),
            "extracted top-k"
        );
        result
    }

    /// Clear all totals.
    pub fn clear(&mut self) {
        self.totals.clear();
    }
}
