//! Core amount logic for Satpad.
//!
//! This crate contains pure logic with ZERO UI or I/O dependencies.
//!
//! # Modules
//!
//! - `currency` - Sats/USD conversion and exchange rate snapshots
//! - `codec` - Typed text to canonical amounts and back to display text
//! - `input` - Explicit state machine behind the amount field

pub mod codec;
pub mod currency;
pub mod input;

pub use codec::{DisplayText, currency_to_text, text_to_currency};
pub use currency::{ConversionTable, ExchangeRate, convert};
pub use input::{AmountInput, InputEvent, InputOutcome, InputSettings, InputView};
