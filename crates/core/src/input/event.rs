//! Inbound events and outbound views.

use rust_decimal::Decimal;
use satpad_shared::AmountError;
use serde::Serialize;

use crate::codec::DisplayText;
use crate::currency::ExchangeRate;

/// Events the UI layer feeds into an [`AmountInput`](super::AmountInput).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// New contents of the text field.
    Keystroke(String),
    /// Swap the preferred display currency.
    ToggleCurrency,
    /// A fresh rate snapshot arrived.
    RateUpdated(ExchangeRate),
    /// The field lost focus; commit the amount.
    Blur,
}

/// What the UI renders after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    /// Amount in the preferred currency.
    pub primary: DisplayText,
    /// Same amount in the other currency, if shown.
    pub secondary: Option<DisplayText>,
    /// Current amount in sats.
    pub sats: Decimal,
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOutcome {
    /// View after the event.
    pub view: InputView,
    /// Sats handed to the rest of the app on commit.
    pub committed: Option<Decimal>,
    /// Why the event was ignored, if it was.
    pub ignored: Option<AmountError>,
}
