//! Core types and configuration for the sales analytics system.
//!
//! This crate provides shared types used across all other crates:
//! - The `Sale` event record and top-K result rows
//! - Configuration structures
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
