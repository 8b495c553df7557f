//! Currency conversion logic.
//!
//! CRITICAL: Rounding strategy for sats/USD:
//! - Always round to the target currency's decimal places
//! - Round half up (amounts are never negative here)
//! - Convert the magnitude only, never a negative amount

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use satpad_shared::{AmountError, AmountResult, Currency, SATS_PER_BTC};

/// Rounds a value to the display precision of `currency`.
#[must_use]
pub fn round_to_currency(value: Decimal, currency: Currency) -> Decimal {
    value.round_dp_with_strategy(
        currency.decimal_places(),
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// Converts `amount` from one currency to another at `rate` USD per BTC.
///
/// Same-currency conversions return the magnitude unchanged. Cross-currency
/// results are rounded to the target's display precision.
pub fn convert(
    amount: Decimal,
    from: Currency,
    to: Currency,
    rate: Decimal,
) -> AmountResult<Decimal> {
    if rate <= Decimal::ZERO {
        return Err(AmountError::InvalidRate(format!(
            "rate must be positive, got {rate}"
        )));
    }

    let amount = amount.abs();
    let converted = match (from, to) {
        (Currency::Btc, Currency::Btc) | (Currency::Usd, Currency::Usd) => return Ok(amount),
        (Currency::Btc, Currency::Usd) => amount
            .checked_div(SATS_PER_BTC)
            .and_then(|btc| btc.checked_mul(rate)),
        (Currency::Usd, Currency::Btc) => amount
            .checked_div(rate)
            .and_then(|btc| btc.checked_mul(SATS_PER_BTC)),
    };

    converted
        .map(|value| round_to_currency(value, to))
        .ok_or_else(|| {
            AmountError::InvalidRate(format!("{amount} {from} at {rate} is out of range"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_one_btc_to_usd() {
        // 100,000,000 sats at 50,000 USD/BTC = 50,000.00 USD
        let result = convert(dec!(100000000), Currency::Btc, Currency::Usd, dec!(50000)).unwrap();
        assert_eq!(result, dec!(50000.00));
    }

    #[test]
    fn test_usd_to_sats() {
        // 50,000 USD at 50,000 USD/BTC = 100,000,000 sats
        let result = convert(dec!(50000), Currency::Usd, Currency::Btc, dec!(50000)).unwrap();
        assert_eq!(result, dec!(100000000));
    }

    #[rstest]
    #[case(Currency::Btc, dec!(1234))]
    #[case(Currency::Usd, dec!(12.345))]
    fn test_same_currency_is_identity(#[case] currency: Currency, #[case] amount: Decimal) {
        let result = convert(amount, currency, currency, dec!(50000)).unwrap();
        assert_eq!(result, amount);
    }

    #[test]
    fn test_sats_to_usd_rounds_half_up() {
        // 1 sat at 50,000 = 0.0005 USD -> 0.00; 10 sats = 0.005 -> 0.01
        let one = convert(dec!(1), Currency::Btc, Currency::Usd, dec!(50000)).unwrap();
        assert_eq!(one, dec!(0.00));
        let ten = convert(dec!(10), Currency::Btc, Currency::Usd, dec!(50000)).unwrap();
        assert_eq!(ten, dec!(0.01));
    }

    #[test]
    fn test_usd_to_sats_rounds_to_whole_sats() {
        // 0.01 USD at 30,000 = 33.333... sats -> 33
        let result = convert(dec!(0.01), Currency::Usd, Currency::Btc, dec!(30000)).unwrap();
        assert_eq!(result, dec!(33));
        // 0.01 USD at 40,000 = 25 sats exactly
        let exact = convert(dec!(0.01), Currency::Usd, Currency::Btc, dec!(40000)).unwrap();
        assert_eq!(exact, dec!(25));
    }

    #[test]
    fn test_negative_amount_converts_magnitude() {
        let result = convert(dec!(-100000000), Currency::Btc, Currency::Usd, dec!(50000)).unwrap();
        assert_eq!(result, dec!(50000.00));
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-1))]
    fn test_non_positive_rate_is_invalid(#[case] rate: Decimal) {
        let result = convert(dec!(100), Currency::Btc, Currency::Usd, rate);
        assert!(matches!(result, Err(AmountError::InvalidRate(_))));
    }

    #[test]
    fn test_invalid_rate_rejected_for_same_currency() {
        let result = convert(dec!(100), Currency::Usd, Currency::Usd, Decimal::ZERO);
        assert!(matches!(result, Err(AmountError::InvalidRate(_))));
    }

    #[test]
    fn test_out_of_range_is_invalid_rate() {
        let result = convert(Decimal::MAX, Currency::Usd, Currency::Btc, dec!(0.0000001));
        assert!(matches!(result, Err(AmountError::InvalidRate(_))));
    }

    #[test]
    fn test_round_to_currency() {
        assert_eq!(round_to_currency(dec!(2.5), Currency::Btc), dec!(3));
        assert_eq!(round_to_currency(dec!(1.005), Currency::Usd), dec!(1.01));
        assert_eq!(round_to_currency(dec!(1.004), Currency::Usd), dec!(1.00));
    }
}
