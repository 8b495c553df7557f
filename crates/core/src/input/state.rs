//! Explicit amount input state and its transitions.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use satpad_shared::config::{InputConfig, RateConfig};
use satpad_shared::{AmountResult, AppConfig, Currency, MoneyAmount};
use tracing::{debug, info, warn};

use super::event::{InputEvent, InputOutcome, InputView};
use crate::codec::{self, DIGIT_LIMIT};
use crate::currency::{ConversionTable, ExchangeRate};

/// Behavior switches for an amount input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSettings {
    /// Maximum raw digits accepted before truncation.
    pub digit_limit: usize,
    /// Whether keystrokes are accepted.
    pub editable: bool,
    /// Whether the secondary amount is rendered.
    pub show_secondary: bool,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            digit_limit: DIGIT_LIMIT,
            editable: true,
            show_secondary: true,
        }
    }
}

impl From<&InputConfig> for InputSettings {
    fn from(config: &InputConfig) -> Self {
        Self {
            digit_limit: config.digit_limit,
            editable: config.editable,
            show_secondary: config.show_secondary,
        }
    }
}

/// State behind a sats/USD amount field.
///
/// The sats amount is the value the rest of the app consumes; the USD amount
/// is kept alongside so either can be shown as primary. `source` is the side
/// last set directly (typed or seeded); rate changes recompute from it.
#[derive(Debug, Clone)]
pub struct AmountInput {
    preferred: Currency,
    source: Currency,
    sats: Decimal,
    usd: Decimal,
    raw_input: String,
    table: ConversionTable,
    settings: InputSettings,
}

impl AmountInput {
    /// Creates an empty input.
    #[must_use]
    pub fn new(preferred: Currency, table: ConversionTable, settings: InputSettings) -> Self {
        Self {
            preferred,
            source: preferred,
            sats: Decimal::ZERO,
            usd: Decimal::ZERO,
            raw_input: codec::to_canonical(Decimal::ZERO, preferred),
            table,
            settings,
        }
    }

    /// Creates an input from configuration, seeding the rate if one is configured.
    pub fn from_config(config: &AppConfig, now: DateTime<Utc>) -> AmountResult<Self> {
        let rate = config
            .rates
            .initial_usd_per_btc
            .map(|price| ExchangeRate::new(price, now))
            .transpose()?;
        let table = ConversionTable::new(rate).with_max_age(max_age(&config.rates));

        Ok(Self::new(
            config.input.preferred_currency,
            table,
            InputSettings::from(&config.input),
        ))
    }

    /// Starts from an existing amount in sats.
    ///
    /// The USD side stays zero until a usable rate arrives; the sats amount
    /// is kept as the source either way.
    #[must_use]
    pub fn with_sats(mut self, sats: Decimal) -> Self {
        self.sats = sats.abs();
        self.source = Currency::Btc;
        if let Err(error) = self.set_amounts(self.sats, Currency::Btc, Utc::now()) {
            debug!(%error, "USD side pending a usable rate");
            self.usd = Decimal::ZERO;
            self.raw_input = codec::to_canonical(self.primary_amount().value, self.preferred);
        }
        self
    }

    /// Currency the primary amount is shown in.
    #[must_use]
    pub fn preferred(&self) -> Currency {
        self.preferred
    }

    /// Current amount in sats.
    #[must_use]
    pub fn sats(&self) -> Decimal {
        self.sats
    }

    /// Canonical text behind the primary display.
    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Conversion table in use.
    #[must_use]
    pub fn table(&self) -> &ConversionTable {
        &self.table
    }

    /// Amount in the preferred currency.
    #[must_use]
    pub fn primary_amount(&self) -> MoneyAmount {
        self.amount_in(self.preferred)
    }

    /// Amount in the other currency.
    #[must_use]
    pub fn secondary_amount(&self) -> MoneyAmount {
        self.amount_in(self.preferred.other())
    }

    fn amount_in(&self, currency: Currency) -> MoneyAmount {
        match currency {
            Currency::Btc => MoneyAmount::new(self.sats, Currency::Btc),
            Currency::Usd => MoneyAmount::new(self.usd, Currency::Usd),
        }
    }

    /// Renders the current state.
    #[must_use]
    pub fn view(&self) -> InputView {
        let primary = codec::currency_to_text(&self.raw_input, self.preferred)
            .unwrap_or_else(|error| {
                debug!(%error, raw_input = %self.raw_input, "Rendering held amount instead of raw input");
                let amount = self.primary_amount();
                codec::format_amount(amount.value, amount.currency)
            });
        let secondary = self.settings.show_secondary.then(|| {
            let amount = self.secondary_amount();
            codec::format_amount(amount.value, amount.currency)
        });

        InputView {
            primary,
            secondary,
            sats: self.sats,
        }
    }

    /// Applies an event, checking rate freshness against the clock.
    pub fn apply(&mut self, event: InputEvent) -> InputOutcome {
        self.apply_at(event, Utc::now())
    }

    /// Applies an event, checking rate freshness at `now`.
    pub fn apply_at(&mut self, event: InputEvent, now: DateTime<Utc>) -> InputOutcome {
        let mut committed = None;
        let result = match event {
            InputEvent::Keystroke(text) => self.on_keystroke(&text, now),
            InputEvent::ToggleCurrency => self.on_toggle(now),
            InputEvent::RateUpdated(rate) => self.on_rate(rate, now),
            InputEvent::Blur => {
                info!(sats = %self.sats, "Amount committed");
                committed = Some(self.sats);
                Ok(())
            }
        };

        InputOutcome {
            view: self.view(),
            committed,
            ignored: result.err(),
        }
    }

    fn on_keystroke(&mut self, text: &str, now: DateTime<Utc>) -> AmountResult<()> {
        if !self.settings.editable {
            debug!("Keystroke ignored, input is not editable");
            return Ok(());
        }

        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let canonical =
            codec::text_to_currency_with_limit(&digits, self.preferred, self.settings.digit_limit);

        let value = codec::parse_amount(&canonical).inspect_err(|error| {
            debug!(%error, "Keystroke ignored");
        })?;
        self.set_amounts(value, self.preferred, now)
    }

    fn on_rate(&mut self, rate: ExchangeRate, now: DateTime<Utc>) -> AmountResult<()> {
        let rate = ExchangeRate::new(rate.usd_per_btc, rate.fetched_at).inspect_err(|error| {
            warn!(%error, "Rate update rejected");
        })?;
        self.table.update(rate);
        self.refresh(now)
    }

    /// Flips the preferred currency and refreshes the pair from the source side.
    ///
    /// The flip happens even without a usable rate; the held amounts are shown.
    fn on_toggle(&mut self, now: DateTime<Utc>) -> AmountResult<()> {
        self.preferred = self.preferred.other();
        debug!(preferred = %self.preferred, "Preferred currency toggled");
        let result = self.refresh(now);
        if result.is_err() {
            self.raw_input = codec::to_canonical(self.primary_amount().value, self.preferred);
        }
        result
    }

    fn refresh(&mut self, now: DateTime<Utc>) -> AmountResult<()> {
        let source = self.amount_in(self.source);
        self.set_amounts(source.value, source.currency, now)
    }

    /// Recomputes both amounts from `value` in `from`, then the primary text.
    ///
    /// Either everything updates or nothing does.
    fn set_amounts(
        &mut self,
        value: Decimal,
        from: Currency,
        now: DateTime<Utc>,
    ) -> AmountResult<()> {
        let value = value.abs();
        let converted = {
            let to_usd = self.table.converter(from, Currency::Usd, now);
            let to_sats = self.table.converter(from, Currency::Btc, now);
            to_usd(value).and_then(|usd| Ok((usd, to_sats(value)?)))
        };

        match converted {
            Ok((usd, sats)) => {
                self.usd = usd;
                self.sats = sats;
                self.source = from;
                self.raw_input = codec::to_canonical(self.primary_amount().value, self.preferred);
                Ok(())
            }
            Err(error) => {
                warn!(%error, code = error.error_code(), "Conversion failed, keeping previous amounts");
                Err(error)
            }
        }
    }
}

fn max_age(config: &RateConfig) -> Duration {
    i64::try_from(config.max_age_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}
