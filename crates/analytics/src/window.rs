//! Trailing activity window for trend detection.
//!
//! Keeps an arrival-ordered log of `(product, event_time)` and an in-window
//! count per product. Eviction runs inline on `record`, driven by the newest
//! event's time: the window only advances when something is recorded, so a
//! quiet stream leaves stale counts in place. `evict_expired` is the explicit
//! wall-clock alternative and is never called implicitly.

use sales_core::config::WindowConfig;
use sales_core::{Error, Result, TimestampSecs};
use std::collections::{HashMap, VecDeque};
use tracing::debug;

/// Sliding time window of per-product event counts.
#[derive(Debug)]
pub struct ActivityWindow {
    /// Window length in seconds (> 0).
    window_size_secs: i64,
    /// Events in arrival order.
    log: VecDeque<(String, TimestampSecs)>,
    /// In-window event count by product. No zero entries.
    counts: HashMap<String, usize>,
    /// Event time of the most recently recorded entry.
    latest_time: Option<TimestampSecs>,
}

impl ActivityWindow {
    /// Create a window of `window_size_secs` seconds.
    pub fn new(window_size_secs: i64) -> Result<Self> {
        if window_size_secs <= 0 {
            return Err(Error::config(format!(
                "window_size_secs must be > 0, got {window_size_secs}"
            )));
        }
        Ok(Self {
            window_size_secs,
            log: VecDeque::new(),
            counts: HashMap::new(),
            latest_time: None,
        })
    }

    /// Create a window from configuration.
    pub fn from_config(config: &WindowConfig) -> Result<Self> {
        Self::new(config.window_size_secs)
    }

    /// Record one event and evict entries that fell out of the window.
    ///
    /// An entry is evicted once `event_time - entry_time > window_size_secs`;
    /// an age exactly equal to the window stays.
    pub fn record(&mut self, product_key: &str, event_time: TimestampSecs) {
        self.log.push_back((product_key.to_string(), event_time));
        match self.counts.get_mut(product_key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(product_key.to_string(), 1);
            }
        }
        self.latest_time = Some(event_time);

        let evicted = self.evict_from_front(event_time);
        if evicted > 0 {
            debug!(evicted, boundary = event_time, "evicted window entries");
        }
    }

    /// Evict against an external clock reading instead of the newest event.
    ///
    /// This departs from arrival-driven eviction: it lets counts age out when
    /// no sales arrive. Returns the number of entries removed.
    pub fn evict_expired(&mut self, now: TimestampSecs) -> usize {
        let evicted = self.evict_from_front(now);
        if evicted > 0 {
            debug!(evicted, now, "evicted window entries on clock tick");
        }
        evicted
    }

    /// Pop from the front of the log while the front entry is too old
    /// relative to `reference`.
    fn evict_from_front(&mut self, reference: TimestampSecs) -> usize {
        let mut evicted = 0;
        while let Some((_, ts)) = self.log.front() {
            if reference.saturating_sub(*ts) <= self.window_size_secs {
                break;
            }
            if let Some((key, _)) = self.log.pop_front() {
                if let Some(count) = self.counts.get_mut(&key) {
                    *count -= 1;
                    if *count == 0 {
                        self.counts.remove(&key);
                    }
                }
                evicted += 1;
            }
        }
        evicted
    }

    /// In-window event count for a product.
    pub fn count(&self, product_key: &str) -> usize {
        self.counts.get(product_key).copied().unwrap_or(0)
    }

    /// Products with at least `threshold` in-window events, sorted by key.
    pub fn trending(&self, threshold: usize) -> Vec<String> {
        let mut hot: Vec<String> = self
            .counts
            .iter()
            .filter(|(_, &count)| count >= threshold)
            .map(|(key, _)| key.clone())
            .collect();
        hot.sort();
        hot
    }

    /// Number of entries currently in the log.
    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Number of distinct products with a non-zero count.
    pub fn active_products(&self) -> usize {
        self.counts.len()
    }

    pub fn latest_time(&self) -> Option<TimestampSecs> {
        self.latest_time
    }

    pub fn window_size_secs(&self) -> i64 {
        self.window_size_secs
    }

    /// Clear all data.
    pub fn clear(&mut self) {
        self.log.clear();
        self.counts.clear();
        self.latest_time = None;
    }
}
