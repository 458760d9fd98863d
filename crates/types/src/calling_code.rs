// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use derive_more::{Display, From, Into};

#[allow(unused_imports)]
use crate::imports::*;

/// An international dialing prefix as listed in the country dataset, e.g. `+44`.
///
/// Numbering zones shared by several territories keep the dataset's spaced form,
/// e.g. `+1 684` for American Samoa. The first whitespace separated token is
/// always the ITU country code.
#[derive(Display, From, Into, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CallingCode(String);

impl CallingCode {
    /// Wrap a dataset calling code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The calling code as listed in the dataset
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All digits of the calling code, `+1 684` yields `1684`
    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }

    /// The ITU country code token including the plus sign, `+1 684` yields `+1`
    pub fn country_code(&self) -> &str {
        self.0.split_whitespace().next().unwrap_or_default()
    }

    /// The digits of the ITU country code, `+1 684` yields `1`
    pub fn country_code_digits(&self) -> &str {
        self.country_code().trim_start_matches('+')
    }
}

impl AsRef<str> for CallingCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
