// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use anyhow::{Context, Result};
use clap::Parser;
use engine::prelude::*;
use std::fs::File;
use std::io::{self, BufReader};
use std::sync::Arc;

mod cli;
mod replay;
mod trace;

fn main() {
    try_or_exit(run());
}

fn run() -> Result<()> {
    let args = cli::Args::parse();

    let settings = Settings::load(&args.config)
        .with_context(|| format!("Failed to load settings from {}", args.config.display()))?;

    trace::init(&settings.logging)?;

    log::info!("Starting phone input replay");

    let directory = Arc::new(CountryDirectory::bundled().context("Failed to load country dataset")?);
    let mut widget = PhoneInput::new(directory, &settings, args.value.as_deref())
        .context("Failed to mount the phone input")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let replayed = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;

            replay::run(&mut widget, BufReader::new(file), &mut out)?
        }
        None => replay::run(&mut widget, io::stdin().lock(), &mut out)?,
    };

    log::info!("Replayed {} events", replayed);

    Ok(())
}

/// Exit the process with an error status if `result` is an error
fn try_or_exit<T>(result: Result<T>) -> T {
    match result {
        Ok(ok) => ok,
        Err(err) => {
            if log::log_enabled!(log::Level::Error) {
                log::error!("Crashed with error: {:?}", err);
            } else {
                eprintln!("Crashed with error: {err:?}");
            }

            std::process::exit(-1);
        }
    }
}
