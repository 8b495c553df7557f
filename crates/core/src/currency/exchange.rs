//! Exchange rate snapshots and the enum-keyed conversion table.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use satpad_shared::{AmountError, AmountResult, Currency};
use serde::{Deserialize, Serialize};

use super::conversion::convert;

/// BTC/USD price snapshot supplied by an external rate source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Price of one bitcoin in US dollars.
    pub usd_per_btc: Decimal,
    /// When the rate source produced this price.
    pub fetched_at: DateTime<Utc>,
}

impl ExchangeRate {
    /// Creates a rate snapshot, rejecting non-positive prices.
    pub fn new(usd_per_btc: Decimal, fetched_at: DateTime<Utc>) -> AmountResult<Self> {
        if usd_per_btc <= Decimal::ZERO {
            return Err(AmountError::InvalidRate(format!(
                "rate must be positive, got {usd_per_btc}"
            )));
        }
        Ok(Self {
            usd_per_btc,
            fetched_at,
        })
    }

    /// Returns true if the snapshot is older than `max_age` at `now`.
    ///
    /// A zero `max_age` never expires.
    #[must_use]
    pub fn is_stale(&self, now: DateTime<Utc>, max_age: Duration) -> bool {
        !max_age.is_zero() && now - self.fetched_at > max_age
    }
}

/// Conversion table keyed by source and target currency.
///
/// Holds at most one rate snapshot. Same-currency lookups always succeed;
/// cross-currency lookups need a usable rate.
#[derive(Debug, Clone, Default)]
pub struct ConversionTable {
    rate: Option<ExchangeRate>,
    max_age: Duration,
}

impl ConversionTable {
    /// Creates a table with an optional starting rate and no staleness limit.
    #[must_use]
    pub fn new(rate: Option<ExchangeRate>) -> Self {
        Self {
            rate,
            max_age: Duration::zero(),
        }
    }

    /// Sets the age after which the held rate is treated as unavailable.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// The currently held rate snapshot, usable or not.
    #[must_use]
    pub fn rate(&self) -> Option<&ExchangeRate> {
        self.rate.as_ref()
    }

    /// Replaces the held rate snapshot.
    pub fn update(&mut self, rate: ExchangeRate) {
        self.rate = Some(rate);
    }

    /// Returns the held price if it exists and is fresh at `now`.
    pub fn usable_rate(&self, now: DateTime<Utc>) -> AmountResult<Decimal> {
        let rate = self
            .rate
            .ok_or_else(|| AmountError::InvalidRate("no rate fetched yet".to_string()))?;
        if rate.is_stale(now, self.max_age) {
            return Err(AmountError::InvalidRate(format!(
                "rate from {} is older than {}s",
                rate.fetched_at,
                self.max_age.num_seconds()
            )));
        }
        Ok(rate.usd_per_btc)
    }

    /// Returns the conversion function for `from` → `to`, checked for freshness at `now`.
    pub fn converter(
        &self,
        from: Currency,
        to: Currency,
        now: DateTime<Utc>,
    ) -> impl Fn(Decimal) -> AmountResult<Decimal> + '_ {
        move |amount| self.convert_at(amount, from, to, now)
    }

    /// Converts `amount` using the held rate, checked for freshness against the clock.
    pub fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> AmountResult<Decimal> {
        self.convert_at(amount, from, to, Utc::now())
    }

    /// Converts `amount` using the held rate, checked for freshness at `now`.
    pub fn convert_at(
        &self,
        amount: Decimal,
        from: Currency,
        to: Currency,
        now: DateTime<Utc>,
    ) -> AmountResult<Decimal> {
        if from == to {
            return Ok(amount.abs());
        }
        convert(amount, from, to, self.usable_rate(now)?)
    }
}
