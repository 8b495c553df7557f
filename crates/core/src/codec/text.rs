//! Typed text to canonical numeric strings.

use std::str::FromStr;

use rust_decimal::Decimal;
use satpad_shared::{AmountError, AmountResult, Currency};
use tracing::debug;

/// Default cap on raw digits accepted from user input.
pub const DIGIT_LIMIT: usize = 10;

/// Raw input reduced to its digits, capped at the digit limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedInput {
    /// Accepted digits, in input order.
    pub digits: String,
    /// Index into `digits` where an explicit decimal point sat, if kept.
    pub point: Option<usize>,
    /// True if digits beyond the limit were dropped.
    pub truncated: bool,
}

/// Strips everything but digits, keeping the first decimal point for USD.
#[must_use]
pub fn sanitize(raw: &str, currency: Currency, digit_limit: usize) -> SanitizedInput {
    let mut digits = String::with_capacity(digit_limit.min(raw.len()));
    let mut point = None;
    let mut truncated = false;

    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            if digits.len() < digit_limit {
                digits.push(ch);
            } else {
                truncated = true;
            }
        } else if ch == '.' && currency == Currency::Usd && point.is_none() {
            point = Some(digits.len());
        }
    }

    SanitizedInput {
        digits,
        point,
        truncated,
    }
}

/// Converts typed text into a canonical numeric string using [`DIGIT_LIMIT`].
#[must_use]
pub fn text_to_currency(raw: &str, currency: Currency) -> String {
    text_to_currency_with_limit(raw, currency, DIGIT_LIMIT)
}

/// Converts typed text into a canonical numeric string.
///
/// BTC yields a plain integer. USD yields two decimals: without an explicit
/// point the last two digits are cents. Empty input yields zero. Digits past
/// `digit_limit` are dropped.
#[must_use]
pub fn text_to_currency_with_limit(raw: &str, currency: Currency, digit_limit: usize) -> String {
    let input = sanitize(raw, currency, digit_limit);
    if input.truncated {
        let error = AmountError::Overflow { limit: digit_limit };
        debug!(
            %error,
            %currency,
            "Input truncated to digit limit"
        );
    }

    match currency {
        Currency::Btc => integer_part(&input.digits).to_string(),
        Currency::Usd => {
            let (int, frac) = match input.point {
                Some(pos) => input.digits.split_at(pos),
                None => input.digits.split_at(input.digits.len().saturating_sub(2)),
            };
            let cents = match input.point {
                Some(_) => format!("{:0<2}", &frac[..frac.len().min(2)]),
                None => format!("{frac:0>2}"),
            };
            format!("{}.{cents}", integer_part(int))
        }
    }
}

/// Parses a canonical numeric string, normalizing to its magnitude.
pub fn parse_amount(canonical: &str) -> AmountResult<Decimal> {
    Decimal::from_str(canonical.trim())
        .map(|value| value.abs())
        .map_err(|_| AmountError::NotANumber(canonical.to_string()))
}

fn integer_part(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" => "0",
        rest => rest,
    }
}
