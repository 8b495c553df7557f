//! Canonical numeric strings to display text.

use std::fmt;

use rust_decimal::Decimal;
use satpad_shared::{AmountResult, Currency};
use serde::Serialize;

use super::text::parse_amount;
use crate::currency::round_to_currency;

/// Formatted amount ready for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayText {
    /// Grouped number without currency symbols, e.g. `1,234.56`.
    pub text: String,
    /// Currency the number is expressed in.
    pub currency: Currency,
    /// True when the amount is zero; the UI mutes the glyph.
    pub is_zero: bool,
}

impl DisplayText {
    /// Symbol rendered before the number.
    #[must_use]
    pub fn prefix(&self) -> Option<&'static str> {
        self.currency.prefix()
    }

    /// Unit rendered after the number.
    #[must_use]
    pub fn suffix(&self) -> Option<&'static str> {
        self.currency.suffix()
    }
}

impl fmt::Display for DisplayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.prefix().unwrap_or_default(),
            self.text,
            self.suffix().unwrap_or_default()
        )
    }
}

/// Formats a canonical numeric string for display.
///
/// USD always shows two decimals, BTC shows whole sats. Both are grouped in
/// thousands. An empty string is zero.
pub fn currency_to_text(canonical: &str, currency: Currency) -> AmountResult<DisplayText> {
    let value = if canonical.trim().is_empty() {
        Decimal::ZERO
    } else {
        parse_amount(canonical)?
    };
    Ok(format_amount(value, currency))
}

/// Formats a numeric amount for display.
#[must_use]
pub fn format_amount(value: Decimal, currency: Currency) -> DisplayText {
    let rounded = round_to_currency(value.abs(), currency);
    let rendered = to_canonical(rounded, currency);
    let text = match rendered.split_once('.') {
        Some((int, frac)) => format!("{}.{frac}", group_thousands(int)),
        None => group_thousands(&rendered),
    };

    DisplayText {
        text,
        is_zero: rounded.is_zero(),
        currency,
    }
}

/// Renders the magnitude of `value` as a canonical numeric string at the
/// currency's precision.
#[must_use]
pub fn to_canonical(value: Decimal, currency: Currency) -> String {
    let mut value = round_to_currency(value.abs(), currency);
    value.rescale(currency.decimal_places());
    value.to_string()
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
