// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use std::str::FromStr;

use derive_more::Display;
use strum::{AsRefStr, EnumString, IntoStaticStr};

#[allow(unused_imports)]
use crate::imports::*;
use crate::CallingCode;

/// Error returned when parsing an [`Alpha2`] code fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not an ISO 3166-1 alpha-2 code")]
pub struct ParseAlpha2Error(String);

/// An ISO 3166-1 alpha-2 country code, always stored in upper case
#[derive(Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alpha2(String);

impl Alpha2 {
    /// Get the code as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Alpha2 {
    type Err = ParseAlpha2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();

        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseAlpha2Error(s.into()));
        }

        Ok(Self(code.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for Alpha2 {
    type Error = ParseAlpha2Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Alpha2> for String {
    fn from(value: Alpha2) -> Self {
        value.0
    }
}

impl AsRef<str> for Alpha2 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Assignment status of a dataset entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CountryStatus {
    /// Officially assigned code
    #[strum(serialize = "assigned")]
    #[cfg_attr(feature = "serde", serde(rename = "assigned"))]
    Assigned,

    /// Code reserved by the ISO 3166 maintenance agency
    #[strum(serialize = "reserved")]
    #[cfg_attr(feature = "serde", serde(rename = "reserved"))]
    Reserved,

    /// Code assigned by users outside of the standard, e.g. `XK`
    #[strum(serialize = "user assigned")]
    #[cfg_attr(feature = "serde", serde(rename = "user assigned"))]
    UserAssigned,

    /// Code that was removed from the standard
    #[strum(serialize = "deleted")]
    #[cfg_attr(feature = "serde", serde(rename = "deleted"))]
    Deleted,
}

/// Immutable reference record of a country or territory
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Country {
    /// ISO 3166-1 alpha-2 code
    pub alpha2: Alpha2,

    /// English short name
    pub name: String,

    /// Calling codes in dataset order, the first one is the primary code
    pub calling_codes: Vec<CallingCode>,

    /// Assignment status
    pub status: CountryStatus,
}

impl Country {
    /// Returns the calling code used when the country gets selected
    pub fn primary_calling_code(&self) -> Option<&CallingCode> {
        self.calling_codes.first()
    }

    /// Returns `true` for officially assigned countries
    pub fn is_assigned(&self) -> bool {
        self.status == CountryStatus::Assigned
    }

    /// Returns `true` if the country has the calling code `code`, e.g. `+44`
    pub fn has_calling_code(&self, code: &str) -> bool {
        self.calling_codes.iter().any(|c| c.as_str() == code)
    }

    /// The text a typeahead query is matched against: the name followed by all calling codes
    pub fn search_criteria(&self) -> String {
        let mut criteria = self.name.clone();

        for code in &self.calling_codes {
            criteria.push(' ');
            criteria.push_str(code.as_str());
        }

        criteria
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn samoa() -> Country {
        Country {
            alpha2: "as".parse().unwrap(),
            name: "American Samoa".into(),
            calling_codes: vec![CallingCode::new("+1 684")],
            status: CountryStatus::Assigned,
        }
    }

    #[test]
    fn alpha2_from_str() {
        assert_eq!(Alpha2::from_str("ae").unwrap().as_str(), "AE");
        assert_eq!(Alpha2::from_str(" GB ").unwrap().as_str(), "GB");
        assert!(Alpha2::from_str("GBR").is_err());
        assert!(Alpha2::from_str("4").is_err());
        assert!(Alpha2::from_str("").is_err());
    }

    #[test]
    fn status_from_str() {
        assert_eq!(
            CountryStatus::from_str("user assigned"),
            Ok(CountryStatus::UserAssigned)
        );
        assert_eq!(CountryStatus::Reserved.as_ref(), "reserved");
    }

    #[test]
    fn search_criteria() {
        let country = samoa();

        assert_eq!(country.search_criteria(), "American Samoa +1 684");
        assert_eq!(country.primary_calling_code().unwrap().digits(), "1684");
        assert!(country.has_calling_code("+1 684"));
        assert!(!country.has_calling_code("+1"));
        assert!(country.is_assigned());
    }

    #[test]
    fn deserialize() {
        let json = r#"
        {
            "alpha2": "XK",
            "name": "Kosovo",
            "calling_codes": ["+383"],
            "status": "user assigned"
        }
        "#;

        let country: Country = serde_json::from_str(json).unwrap();

        assert_eq!(country.alpha2.as_str(), "XK");
        assert_eq!(country.status, CountryStatus::UserAssigned);
        assert!(!country.is_assigned());
    }
}
