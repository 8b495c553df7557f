//! Text/amount codec.
//!
//! Two directions:
//! - `text_to_currency` - typed text to a canonical numeric string
//! - `currency_to_text` - canonical numeric string to grouped display text

pub mod display;
pub mod text;

#[cfg(test)]
mod props;

pub use display::{DisplayText, currency_to_text, format_amount, to_canonical};
pub use text::{
    DIGIT_LIMIT, SanitizedInput, parse_amount, sanitize, text_to_currency,
    text_to_currency_with_limit,
};
