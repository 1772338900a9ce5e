//! Sale stream production and logging for the sales analytics system.
//!
//! This crate handles:
//! - The fixed product catalog (keys, categories, unit prices)
//! - Synthetic sale generation with randomized quantity
//! - CSV audit log of ingested sales

pub mod catalog;
pub mod simulator;
pub mod sale_log;

pub use catalog::{Catalog, CatalogEntry};
pub use simulator::SalesStreamSimulator;
pub use sale_log::SaleLog;
