// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Replay of JSON lines event scripts

use anyhow::{Context, Result};
use engine::prelude::*;
use std::io::{BufRead, Write};

/// Feed every event read from `reader` into `widget`, writing each notification as one JSON line
///
/// Blank lines are skipped, lines that are no valid event are logged and skipped.
/// Returns the number of handled events.
pub fn run<O, R, W>(widget: &mut PhoneInput<O>, reader: R, mut writer: W) -> Result<usize>
where
    O: PhoneOracle,
    R: BufRead,
    W: Write,
{
    let mut handled = 0;

    for (i, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read event script")?;

        if line.trim().is_empty() {
            continue;
        }

        let event: Event = match serde_json::from_str(&line) {
            Ok(event) => event,
            Err(e) => {
                log::warn!("Skipping malformed event on line {}, {}", i + 1, e);
                continue;
            }
        };

        handled += 1;

        if let Some(message) = widget.handle(event) {
            serde_json::to_writer(&mut writer, &message)
                .context("Failed to serialize notification")?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;

    Ok(handled)
}
