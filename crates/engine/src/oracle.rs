// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Seam to the phone number library
//!
//! The engine only talks to the library through [`PhoneOracle`], the default
//! implementation [`LibPhonenumber`] is backed by the `phonenumber` crate.

use crate::directory::CountryDirectory;
use crate::normalizer::normalize;
use displaydoc::Display;
use phonenumber::metadata::{Metadata, DATABASE};
use phonenumber::PhoneNumber;
use std::collections::BTreeSet;
use types::Alpha2;

/// A stateful as-you-type formatting session
pub trait AsYouType {
    /// Feed the next character, returns the formatted snapshot of all input so far
    fn input_digit(&mut self, ch: char) -> String;
}

/// Successfully parsed number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedNumber {
    /// The library's INTERNATIONAL rendering
    pub international: String,

    /// `true` if the national number length is plausible for the region
    pub possible: bool,
}

/// Reason reported by the library when parsing fails
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// The string supplied did not seem to be a phone number
    NotANumber,
    /// The string supplied is too short to be a phone number
    TooShortNsn,
    /// Phone number too short after IDD
    TooShortAfterIdd,
    /// The string supplied is too long to be a phone number
    TooLong,
    /// Invalid country calling code
    InvalidCountryCode,
    /// {0}
    Other(String),
}

pub trait PhoneOracle {
    /// Start a fresh formatting session seeded with the region hint
    fn as_you_type(&self, region: Option<&Alpha2>) -> Box<dyn AsYouType + '_>;

    /// Parse free text, using the region hint for numbers without a calling code
    fn parse(&self, text: &str, region: Option<&Alpha2>) -> Result<ParsedNumber, ParseFailure>;
}

impl From<phonenumber::ParseError> for ParseFailure {
    fn from(err: phonenumber::ParseError) -> Self {
        match err {
            phonenumber::ParseError::NoNumber => Self::NotANumber,
            phonenumber::ParseError::TooShortNsn => Self::TooShortNsn,
            phonenumber::ParseError::TooShortAfterIdd => Self::TooShortAfterIdd,
            phonenumber::ParseError::TooLong => Self::TooLong,
            phonenumber::ParseError::InvalidCountryCode => Self::InvalidCountryCode,
            other => Self::Other(other.to_string()),
        }
    }
}

/// [`PhoneOracle`] backed by the `phonenumber` crate
#[derive(Debug, Clone)]
pub struct LibPhonenumber {
    itu_codes: BTreeSet<String>,
}

impl LibPhonenumber {
    pub fn new(directory: &CountryDirectory) -> Self {
        Self {
            itu_codes: directory.itu_codes(),
        }
    }
}

impl PhoneOracle for LibPhonenumber {
    fn as_you_type(&self, _region: Option<&Alpha2>) -> Box<dyn AsYouType + '_> {
        // Only international input is fed into the formatter, the calling code
        // determines the region, the hint is irrelevant
        Box::new(Session {
            itu_codes: &self.itu_codes,
            input: String::new(),
        })
    }

    fn parse(&self, text: &str, region: Option<&Alpha2>) -> Result<ParsedNumber, ParseFailure> {
        let number = parse_phone_number(
            text,
            region.and_then(|region| region.as_str().parse().ok()),
        )?;

        Ok(ParsedNumber {
            international: number
                .format()
                .mode(phonenumber::Mode::International)
                .to_string(),
            possible: is_possible(&number, region),
        })
    }
}

/// Longest national significant number the library accepts
const MAX_NATIONAL_LENGTH: usize = 17;

/// Digits typed before the more specific leading digit patterns apply
const MIN_LEADING_DIGITS: usize = 3;

/// Length check of the national number against the possible lengths of its region
///
/// Unlike [`phonenumber::is_valid`] this does not require the number to match
/// any number type pattern.
fn is_possible(number: &PhoneNumber, region: Option<&Alpha2>) -> bool {
    let code = number.code().value();

    let metadata = region
        .and_then(|region| DATABASE.by_id(region.as_str()))
        .filter(|metadata| metadata.country_code() == code)
        .or_else(|| main_metadata(code));

    let Some(metadata) = metadata else {
        return false;
    };

    let Ok(length) = u16::try_from(number.national().to_string().len()) else {
        return false;
    };

    let descriptors = metadata.descriptors();

    if !descriptors.general().possible_length().is_empty() {
        return descriptors.general().possible_length().contains(&length);
    }

    // The bundled metadata only carries lengths per number type
    [
        descriptors.fixed_line(),
        descriptors.mobile(),
        descriptors.toll_free(),
        descriptors.premium_rate(),
        descriptors.shared_cost(),
        descriptors.personal_number(),
        descriptors.voip(),
        descriptors.pager(),
        descriptors.uan(),
        descriptors.voicemail(),
    ]
    .into_iter()
    .flatten()
    .any(|descriptor| descriptor.possible_length().contains(&length))
}

/// Metadata of the main region for a country calling code
fn main_metadata(code: u16) -> Option<&'static Metadata> {
    DATABASE
        .by_code(&code)
        .and_then(|metadata| metadata.into_iter().next())
}

/// Parse a phone number, turning panics of the library into [`ParseFailure::Other`]
fn parse_phone_number(
    phone_number: &str,
    region: Option<phonenumber::country::Id>,
) -> Result<PhoneNumber, ParseFailure> {
    // Remove characters from the phone number to make the parsing easier
    let phone_number = phone_number.replace(['(', ')', ' ', '-'], "");

    // Catch panics because the phonenumber crate has some questionable unwraps
    let result = std::panic::catch_unwind(move || phonenumber::parse(region, phone_number));

    match result {
        Ok(Ok(number)) => Ok(number),
        Ok(Err(err)) => Err(err.into()),
        Err(err) => {
            log::error!(
                "phonenumber crate panicked while parsing phone number: {:?}",
                err
            );
            Err(ParseFailure::Other("phone number library panicked".into()))
        }
    }
}

struct Session<'a> {
    itu_codes: &'a BTreeSet<String>,
    input: String,
}

impl Session<'_> {
    fn snapshot(&self) -> String {
        let Some(digits) = self.input.strip_prefix('+') else {
            return self.input.clone();
        };

        // ITU country codes are prefix free, the shortest match is the only one
        let Some(code) = (1..=3.min(digits.len()))
            .map(|len| &digits[..len])
            .find(|code| self.itu_codes.contains(*code))
        else {
            return self.input.clone();
        };

        let national = &digits[code.len()..];

        if national.is_empty() {
            return format!("+{code}");
        }

        if let Ok(number) = parse_phone_number(&self.input, None) {
            if phonenumber::is_valid(&number) {
                let formatted = number
                    .format()
                    .mode(phonenumber::Mode::International)
                    .to_string();

                // The library may drop a national prefix, the digits typed must survive unchanged
                if normalize(&formatted).digits == digits {
                    return formatted;
                }
            }
        }

        let grouped = code
            .parse()
            .ok()
            .and_then(main_metadata)
            .and_then(|metadata| group_partial(metadata, national))
            .unwrap_or_else(|| national.to_owned());

        format!("+{code} {grouped}")
    }
}

/// Group an incomplete national number by the first international format whose
/// leading digits match what was typed so far
///
/// The format's pattern is matched against the typed digits padded to a full
/// number, only the groups reached by the typed digits are rendered.
fn group_partial(metadata: &Metadata, national: &str) -> Option<String> {
    let formats = if metadata.international_formats().is_empty() {
        metadata.formats()
    } else {
        metadata.international_formats()
    };

    let format = formats.iter().find(|format| {
        let leading = format.leading_digits();

        let Some(last) = leading.len().checked_sub(1) else {
            return true;
        };

        leading[national.len().saturating_sub(MIN_LEADING_DIGITS).min(last)]
            .find(national)
            .map(|found| found.start() == 0)
            .unwrap_or(false)
    })?;

    let groups = (national.len()..=MAX_NATIONAL_LENGTH).find_map(|length| {
        let padded = format!("{national:9<length$}");
        let captures = format.pattern().captures(&padded)?;
        let whole = captures.get(0)?;

        (whole.start() == 0 && whole.end() == padded.len()).then(|| {
            captures
                .iter()
                .skip(1)
                .map(|group| group.map(|group| group.range()))
                .collect::<Vec<_>>()
        })
    })?;

    let mut grouped = String::new();
    let mut separator = String::new();
    let mut template = format.format().chars().peekable();

    while let Some(ch) = template.next() {
        let mut index = None;
        if ch == '$' {
            while let Some(digit) = template.peek().and_then(|next| next.to_digit(10)) {
                index = Some(index.unwrap_or(0) * 10 + digit as usize);
                let _ = template.next();
            }
        }

        let Some(index) = index else {
            separator.push(ch);
            continue;
        };

        let range = groups.get(index.checked_sub(1)?)?.clone()?;
        let typed = national.get(range.start.min(national.len())..range.end.min(national.len()))?;

        if typed.is_empty() {
            break;
        }

        grouped.push_str(&separator);
        grouped.push_str(typed);
        separator.clear();
    }

    // Formats which rearrange or drop digits are not usable while typing
    (normalize(&grouped).digits == national).then_some(grouped)
}

impl AsYouType for Session<'_> {
    fn input_digit(&mut self, ch: char) -> String {
        if ch.is_ascii_digit() || (ch == '+' && self.input.is_empty()) {
            self.input.push(ch);
        }

        self.snapshot()
    }
}
