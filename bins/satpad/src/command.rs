//! Parsing of harness commands into input events.

use std::str::FromStr;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use satpad_core::{ExchangeRate, InputEvent};

/// One line of harness input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Feed an event to the input.
    Event(InputEvent),
    /// Print the current view as JSON.
    Show,
    /// Stop reading.
    Quit,
}

impl Command {
    /// Parses a line such as `type 1234`, `rate 50000`, `toggle` or `blur`.
    pub fn parse(line: &str, now: DateTime<Utc>) -> anyhow::Result<Self> {
        let line = line.trim();
        let (verb, arg) = line.split_once(' ').unwrap_or((line, ""));
        let arg = arg.trim();

        let command = match verb.to_lowercase().as_str() {
            "type" => Self::Event(InputEvent::Keystroke(arg.to_string())),
            "toggle" => Self::Event(InputEvent::ToggleCurrency),
            "blur" => Self::Event(InputEvent::Blur),
            "rate" => {
                let price = Decimal::from_str(arg)
                    .with_context(|| format!("rate expects a number, got {arg:?}"))?;
                Self::Event(InputEvent::RateUpdated(ExchangeRate::new(price, now)?))
            }
            "show" => Self::Show,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {other:?}"),
        };
        Ok(command)
    }
}
