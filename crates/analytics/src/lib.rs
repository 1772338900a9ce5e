//! Real-time aggregation over the sale stream.
//!
//! This crate handles:
//! - All-time quantity totals with bounded-heap top-K extraction
//! - Trailing time window of per-product event counts (trend detection)
//! - The engine that applies each sale to both views
//! - A lock-guarded handle for concurrent producers and readers

pub mod cumulative;
pub mod window;
pub mod engine;
pub mod shared;

pub use cumulative::CumulativeTracker;
pub use window::ActivityWindow;
pub use engine::AggregationEngine;
pub use shared::{EngineSnapshot, SharedEngine};
