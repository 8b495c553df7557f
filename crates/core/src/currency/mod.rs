//! Sats/USD conversion and exchange rates.

pub mod conversion;
pub mod exchange;

#[cfg(test)]
mod props;

pub use conversion::{convert, round_to_currency};
pub use exchange::{ConversionTable, ExchangeRate};
