//! Core data types for the sales analytics system.

use chrono::Utc;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Timestamp in seconds since Unix epoch (UTC).
pub type TimestampSecs = i64;

/// Unit price type with ordering support.
pub type Price = OrderedFloat<f64>;

/// Current wall-clock time in epoch seconds.
#[inline]
pub fn now_secs() -> TimestampSecs {
    Utc::now().timestamp()
}

/// A single sale event from the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Product identifier (e.g., "iPhone 15").
    pub product_key: String,
    /// Product category (e.g., "Phone").
    pub category: String,
    /// Units sold, at least 1.
    pub quantity: u32,
    /// Price per unit.
    pub unit_price: Price,
    /// Event time in epoch seconds.
    pub event_time: TimestampSecs,
}

impl Sale {
    /// Create a new sale.
    pub fn new(
        product_key: impl Into<String>,
        category: impl Into<String>,
        quantity: u32,
        unit_price: f64,
        event_time: TimestampSecs,
    ) -> Self {
        Self {
            product_key: product_key.into(),
            category: category.into(),
            quantity,
            unit_price: OrderedFloat(unit_price),
            event_time,
        }
    }

    /// Check the ingest contract: non-empty key, positive quantity, finite non-negative price.
    pub fn validate(&self) -> Result<()> {
        if self.product_key.trim().is_empty() {
            return Err(Error::invalid_sale("empty product key"));
        }
        if self.quantity == 0 {
            return Err(Error::invalid_sale(format!(
                "quantity must be >= 1 for '{}'",
                self.product_key
            )));
        }
        let price = self.unit_price.into_inner();
        if !price.is_finite() || price < 0.0 {
            return Err(Error::invalid_sale(format!(
                "unit price must be finite and >= 0 for '{}', got {}",
                self.product_key, price
            )));
        }
        Ok(())
    }

    /// Total value of the sale.
    #[inline]
    pub fn revenue(&self) -> f64 {
        self.quantity as f64 * self.unit_price.into_inner()
    }
}

/// One row of a top-K ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductTotal {
    /// Product identifier.
    pub product_key: String,
    /// All-time units sold.
    pub total_quantity: u64,
}

impl ProductTotal {
    pub fn new(product_key: impl Into<String>, total_quantity: u64) -> Self {
        Self {
            product_key: product_key.into(),
            total_quantity,
        }
    }
}
