//! Property-based tests for currency conversion.
//!
//! - Same-currency conversion is the identity
//! - Conversion is monotonic for a fixed rate and direction
//! - Results carry the target currency's precision

use proptest::prelude::*;
use rust_decimal::Decimal;
use satpad_shared::Currency;

use super::conversion::convert;

/// Sats amounts from 0 to 9,999,999,999 (the ten digit input range).
fn sats_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(Decimal::from)
}

/// USD amounts from 0.00 to 99,999,999.99.
fn usd_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// USD per BTC from 0.01 to 10,000,000.00.
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn currency() -> impl Strategy<Value = Currency> {
    prop_oneof![Just(Currency::Btc), Just(Currency::Usd)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// *For any* amount, currency and valid rate, converting to the same
    /// currency SHALL return the amount unchanged.
    #[test]
    fn prop_same_currency_is_identity(
        amount in usd_amount(),
        currency in currency(),
        rate in positive_rate(),
    ) {
        prop_assert_eq!(convert(amount, currency, currency, rate).unwrap(), amount);
    }

    /// *For any* two sats amounts a1 < a2, the USD values SHALL keep their order.
    #[test]
    fn prop_sats_to_usd_is_monotonic(
        a in sats_amount(),
        b in sats_amount(),
        rate in positive_rate(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_usd = convert(low, Currency::Btc, Currency::Usd, rate).unwrap();
        let high_usd = convert(high, Currency::Btc, Currency::Usd, rate).unwrap();
        prop_assert!(low_usd <= high_usd);
    }

    /// *For any* two USD amounts a1 < a2, the sats values SHALL keep their order.
    #[test]
    fn prop_usd_to_sats_is_monotonic(
        a in usd_amount(),
        b in usd_amount(),
        rate in positive_rate(),
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_sats = convert(low, Currency::Usd, Currency::Btc, rate).unwrap();
        let high_sats = convert(high, Currency::Usd, Currency::Btc, rate).unwrap();
        prop_assert!(low_sats <= high_sats);
    }

    /// *For any* conversion, the result SHALL be non-negative and carry at most
    /// the target currency's decimal places.
    #[test]
    fn prop_result_has_target_precision(
        amount in sats_amount(),
        rate in positive_rate(),
    ) {
        let usd = convert(amount, Currency::Btc, Currency::Usd, rate).unwrap();
        prop_assert!(usd >= Decimal::ZERO);
        prop_assert_eq!(usd, usd.round_dp(2));

        let sats = convert(usd, Currency::Usd, Currency::Btc, rate).unwrap();
        prop_assert!(sats >= Decimal::ZERO);
        prop_assert_eq!(sats, sats.trunc());
    }
}
