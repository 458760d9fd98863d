// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use clap::Parser;
use std::path::PathBuf;

/// Replays input events through a phone input widget and prints its change notifications
#[derive(Parser, Debug, Clone)]
#[command(name = "phone-input", version)]
pub struct Args {
    /// Specify path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// File with one JSON encoded event per line, read from stdin if omitted
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Value the widget is mounted with
    #[arg(long)]
    pub value: Option<String>,
}
