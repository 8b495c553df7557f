//! Money amount with decimal precision and a closed currency set.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of satoshis in one bitcoin.
pub const SATS_PER_BTC: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0);

/// Currencies the amount input understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Bitcoin, always counted in satoshis.
    Btc,
    /// US Dollar
    Usd,
}

impl Currency {
    /// Every supported currency.
    pub const ALL: [Self; 2] = [Self::Btc, Self::Usd];

    /// Decimal places shown for this currency's display unit.
    #[must_use]
    pub const fn decimal_places(self) -> u32 {
        match self {
            Self::Btc => 0,
            Self::Usd => 2,
        }
    }

    /// The counterpart currency shown as the secondary amount.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Btc => Self::Usd,
            Self::Usd => Self::Btc,
        }
    }

    /// Symbol rendered before the number, if any.
    #[must_use]
    pub const fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Btc => None,
            Self::Usd => Some("$"),
        }
    }

    /// Unit rendered after the number, if any.
    #[must_use]
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Btc => Some(" sats"),
            Self::Usd => None,
        }
    }
}

/// A non-negative amount in a currency's natural display unit.
///
/// BTC amounts are satoshis, USD amounts are dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyAmount {
    /// The amount in the display unit (sats or dollars).
    pub value: Decimal,
    /// Currency of `value`.
    pub currency: Currency,
}

impl MoneyAmount {
    /// Creates a new amount, keeping only the magnitude of `value`.
    #[must_use]
    pub fn new(value: Decimal, currency: Currency) -> Self {
        Self {
            value: value.abs(),
            currency,
        }
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            value: Decimal::ZERO,
            currency,
        }
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Btc => write!(f, "BTC"),
            Self::Usd => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BTC" | "SAT" | "SATS" => Ok(Self::Btc),
            "USD" => Ok(Self::Usd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
