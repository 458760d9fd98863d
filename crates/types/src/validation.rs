// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

#[allow(unused_imports)]
use crate::imports::*;

/// Outcome of validating a (country, number) pair
///
/// Created per validation call and only kept as part of the latest update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationResult {
    /// `true` if the number is a possible number for the country
    pub valid: bool,

    /// Failure reason reported by the phone number library, empty if none
    pub internal_message: String,

    /// Configured message that should be shown to the user
    pub friendly_message: String,

    /// The library's international rendering, only set when parsing succeeded
    pub international: Option<String>,
}

impl ValidationResult {
    /// Create a failed result which carries no international rendering
    pub fn invalid(internal_message: impl Into<String>, friendly_message: impl Into<String>) -> Self {
        Self {
            valid: false,
            internal_message: internal_message.into(),
            friendly_message: friendly_message.into(),
            international: None,
        }
    }
}

/// User facing messages supplied by the embedding application
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize, Validate),
    serde(default)
)]
pub struct Messages {
    /// Shown when the number is too short
    #[cfg_attr(feature = "serde", validate(length(min = 1)))]
    pub min_length: String,

    /// Shown when the number is too long
    #[cfg_attr(feature = "serde", validate(length(min = 1)))]
    pub max_length: String,

    /// Shown when no country could be determined or the calling code is invalid
    #[cfg_attr(feature = "serde", validate(length(min = 1)))]
    pub calling_code: String,

    /// Shown for every other failure
    #[cfg_attr(feature = "serde", validate(length(min = 1)))]
    pub catch_all: String,

    /// Shown when the number is a possible number
    #[cfg_attr(feature = "serde", validate(length(min = 1)))]
    pub valid: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            min_length: "Phone number is too short".into(),
            max_length: "Phone number is too long".into(),
            calling_code: "Please select a valid country code".into(),
            catch_all: "Please enter a valid phone number".into(),
            valid: "Phone number is valid".into(),
        }
    }
}
