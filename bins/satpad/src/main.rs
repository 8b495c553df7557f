//! Satpad harness
//!
//! Reads one command per line from stdin, feeds it to an amount input and
//! prints the resulting view.

mod command;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use chrono::Utc;
use satpad_core::{AmountInput, InputOutcome};
use satpad_shared::AppConfig;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command::Command;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "satpad=info,satpad_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let mut input = AmountInput::from_config(&config, Utc::now())?;
    info!(
        preferred = %input.preferred(),
        digit_limit = config.input.digit_limit,
        "Amount input ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match Command::parse(&line, Utc::now()) {
            Ok(Command::Event(event)) => print_outcome(&mut out, &input.apply(event))?,
            Ok(Command::Show) => {
                writeln!(out, "{}", serde_json::to_string_pretty(&input.view())?)?;
            }
            Ok(Command::Quit) => break,
            Err(error) => {
                warn!(%error, "Command ignored");
                writeln!(out, "error: {error:#}")?;
            }
        }
    }

    Ok(())
}

fn print_outcome(out: &mut impl Write, outcome: &InputOutcome) -> io::Result<()> {
    let view = &outcome.view;
    match &view.secondary {
        Some(secondary) => writeln!(out, "{}  ({secondary})", view.primary)?,
        None => writeln!(out, "{}", view.primary)?,
    }
    if let Some(error) = &outcome.ignored {
        writeln!(out, "ignored: {error}")?;
    }
    if let Some(sats) = outcome.committed {
        writeln!(out, "committed: {sats} sats")?;
    }
    Ok(())
}
