// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::oracle::PhoneOracle;
use types::Country;

/// Result of formatting a digit string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatted {
    /// The last snapshot emitted by the as-you-type formatter
    pub display: String,

    /// The leading whitespace delimited token of `display`, e.g. `+44`
    pub calling_code: String,
}

impl Formatted {
    /// Digits of the calling code token without the plus sign
    pub fn calling_code_digits(&self) -> &str {
        self.calling_code.trim_start_matches('+')
    }
}

/// Format `digits` as an international number
///
/// A fresh formatter session is created for every call and `+<digits>` is fed one
/// character at a time, so the result only depends on `country` and `digits`.
pub fn format<O>(oracle: &O, country: Option<&Country>, digits: &str) -> Formatted
where
    O: PhoneOracle + ?Sized,
{
    if digits.is_empty() {
        return Formatted::default();
    }

    let mut session = oracle.as_you_type(country.map(|country| &country.alpha2));

    let display = std::iter::once('+')
        .chain(digits.chars())
        .map(|ch| session.input_digit(ch))
        .last()
        .unwrap_or_default();

    let calling_code = display
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_owned();

    Formatted {
        display,
        calling_code,
    }
}
