// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use displaydoc::Display;
use std::result::Result as stdResult;
use thiserror::Error;
use types::Alpha2;
use validator::ValidationErrors;

pub type Result<T> = stdResult<T, Error>;

#[derive(Display, Error, Debug)]
pub enum Error {
    /// Failed to decode the country dataset: {0}
    Dataset(#[from] serde_json::Error),
    /// The country dataset contains no entries
    EmptyDataset,
    /// Unknown or unassigned country `{0}` in the widget settings
    UnknownCountry(Alpha2),
    /// Invalid widget settings: {0}
    InvalidSettings(#[from] ValidationErrors),
}
