// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::oracle::{ParseFailure, PhoneOracle};
use types::{Country, Messages, ValidationResult};

/// The buckets parse failures are sorted into, each maps to one configured message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureBucket {
    TooShort,
    TooLong,
    InvalidCallingCode,
    Unclassified,
}

impl From<&ParseFailure> for FailureBucket {
    fn from(failure: &ParseFailure) -> Self {
        match failure {
            ParseFailure::NotANumber
            | ParseFailure::TooShortNsn
            | ParseFailure::TooShortAfterIdd => Self::TooShort,
            ParseFailure::TooLong => Self::TooLong,
            ParseFailure::InvalidCountryCode => Self::InvalidCallingCode,
            ParseFailure::Other(_) => Self::Unclassified,
        }
    }
}

/// Classifies (country, number) pairs and maps the outcome to the configured messages
#[derive(Debug, Clone)]
pub struct Validator {
    messages: Messages,
}

impl Validator {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn message(&self, bucket: FailureBucket) -> &str {
        match bucket {
            FailureBucket::TooShort => &self.messages.min_length,
            FailureBucket::TooLong => &self.messages.max_length,
            FailureBucket::InvalidCallingCode => &self.messages.calling_code,
            FailureBucket::Unclassified => &self.messages.catch_all,
        }
    }

    /// Result used whenever no country is known, no parse is attempted
    pub fn no_country(&self) -> ValidationResult {
        ValidationResult::invalid("", self.messages.calling_code.clone())
    }

    pub fn validate<O>(
        &self,
        oracle: &O,
        country: Option<&Country>,
        international: &str,
    ) -> ValidationResult
    where
        O: PhoneOracle + ?Sized,
    {
        let Some(country) = country else {
            return self.no_country();
        };

        match oracle.parse(international, Some(&country.alpha2)) {
            Ok(parsed) => {
                let friendly_message = if parsed.possible {
                    self.messages.valid.clone()
                } else {
                    self.message(FailureBucket::Unclassified).to_owned()
                };

                ValidationResult {
                    valid: parsed.possible,
                    internal_message: String::new(),
                    friendly_message,
                    international: Some(parsed.international),
                }
            }
            Err(failure) => {
                log::debug!("number did not parse for {}: {}", country.alpha2, failure);

                let bucket = FailureBucket::from(&failure);

                ValidationResult::invalid(failure.to_string(), self.message(bucket))
            }
        }
    }
}
