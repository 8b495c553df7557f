//! Property-based tests for the text codec.

use proptest::prelude::*;
use rust_decimal::Decimal;
use satpad_shared::Currency;

use super::display::currency_to_text;
use super::text::{DIGIT_LIMIT, parse_amount, text_to_currency};

fn strip_formatting(display: &str) -> String {
    display.chars().filter(char::is_ascii_digit).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* sats amount within the digit limit, formatting then re-typing
    /// the display text SHALL reproduce the canonical string.
    #[test]
    fn prop_btc_round_trip(sats in 0u64..10_000_000_000u64) {
        let canonical = sats.to_string();
        let display = currency_to_text(&canonical, Currency::Btc).unwrap();
        prop_assert_eq!(
            text_to_currency(&strip_formatting(&display.text), Currency::Btc),
            canonical
        );
    }

    /// *For any* USD amount within the digit limit, formatting then re-typing
    /// the display text SHALL reproduce the canonical string.
    #[test]
    fn prop_usd_round_trip(cents in 0i64..10_000_000_000i64) {
        let canonical = Decimal::new(cents, 2).to_string();
        let display = currency_to_text(&canonical, Currency::Usd).unwrap();
        prop_assert_eq!(
            text_to_currency(&strip_formatting(&display.text), Currency::Usd),
            canonical
        );
    }

    /// *For any* digit string longer than the limit, only the first
    /// `DIGIT_LIMIT` digits SHALL count.
    #[test]
    fn prop_digit_limit_truncates(raw in "[0-9]{11,20}") {
        for currency in Currency::ALL {
            prop_assert_eq!(
                text_to_currency(&raw, currency),
                text_to_currency(&raw[..DIGIT_LIMIT], currency)
            );
        }
    }

    /// *For any* typed text, the canonical output SHALL parse as a number.
    #[test]
    fn prop_canonical_always_parses(raw in "\\PC{0,24}") {
        for currency in Currency::ALL {
            prop_assert!(parse_amount(&text_to_currency(&raw, currency)).is_ok());
        }
    }
}
