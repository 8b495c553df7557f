//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Amount input behavior.
    #[serde(default)]
    pub input: InputConfig,
    /// Exchange rate handling.
    #[serde(default)]
    pub rates: RateConfig,
}

/// Amount input configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Maximum raw digits accepted before truncation.
    #[serde(default = "default_digit_limit")]
    pub digit_limit: usize,
    /// Whether keystrokes are accepted.
    #[serde(default = "default_true")]
    pub editable: bool,
    /// Whether the converted secondary amount is shown.
    #[serde(default = "default_true")]
    pub show_secondary: bool,
    /// Currency the primary amount starts in.
    #[serde(default = "default_preferred_currency")]
    pub preferred_currency: Currency,
}

fn default_digit_limit() -> usize {
    10
}

fn default_true() -> bool {
    true
}

fn default_preferred_currency() -> Currency {
    Currency::Btc
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            digit_limit: default_digit_limit(),
            editable: true,
            show_secondary: true,
            preferred_currency: default_preferred_currency(),
        }
    }
}

/// Exchange rate configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RateConfig {
    /// Seconds after which a rate snapshot is considered stale. Zero disables the check.
    #[serde(default)]
    pub max_age_secs: u64,
    /// Rate to start with before the first refresh, in USD per BTC.
    #[serde(default)]
    pub initial_usd_per_btc: Option<Decimal>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("SATPAD").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
