//! Shared types, errors, and configuration for Satpad.
//!
//! This crate provides common types used across all other crates:
//! - Money amounts with decimal precision over a closed currency set
//! - The amount error taxonomy
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AmountError, AmountResult};
pub use types::{Currency, MoneyAmount, SATS_PER_BTC};
