// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Read-only lookup over the country and calling code dataset

use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashMap};
use types::{Alpha2, Country};

/// The dataset shipped with this crate, entries are ordered by alpha-2 code
const BUNDLED_DATASET: &str = include_str!("../data/countries.json");

/// Owner of the `+1` numbering zone, which is shared by the NANP territories
const NANP_DEFAULT: &str = "US";

pub struct CountryDirectory {
    countries: Vec<Country>,
    by_alpha2: HashMap<Alpha2, usize>,
}

impl CountryDirectory {
    /// Decode the dataset bundled with this crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_DATASET)
    }

    /// Decode a dataset from a JSON array of country records
    ///
    /// The order of the array is the dataset order used for calling code
    /// resolution and for the unfiltered country list.
    pub fn from_json(json: &str) -> Result<Self> {
        let countries: Vec<Country> = serde_json::from_str(json)?;

        Self::new(countries)
    }

    pub fn new(countries: Vec<Country>) -> Result<Self> {
        if countries.is_empty() {
            return Err(Error::EmptyDataset);
        }

        let by_alpha2 = countries
            .iter()
            .enumerate()
            .map(|(i, country)| (country.alpha2.clone(), i))
            .collect();

        log::debug!("loaded country directory with {} entries", countries.len());

        Ok(Self {
            countries,
            by_alpha2,
        })
    }

    /// All entries in dataset order, regardless of their status
    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    /// Officially assigned entries in dataset order
    pub fn assigned(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter().filter(|country| country.is_assigned())
    }

    /// Direct lookup by alpha-2 code, returns [`None`] for unknown codes
    pub fn by_alpha2(&self, code: &Alpha2) -> Option<&Country> {
        self.by_alpha2.get(code).map(|&i| &self.countries[i])
    }

    /// Resolve the country a calling code prefix belongs to
    ///
    /// `+1` is shared by dozens of territories and always resolves to the NANP default.
    /// Every other prefix resolves to the first assigned country in dataset order that
    /// lists `+<prefix>` as one of its calling codes.
    pub fn resolve_by_calling_code(&self, prefix: &str) -> Option<&Country> {
        let prefix = prefix.trim();
        let prefix = prefix.strip_prefix('+').unwrap_or(prefix);

        if prefix.is_empty() {
            return None;
        }

        if prefix == "1" {
            return NANP_DEFAULT
                .parse()
                .ok()
                .and_then(|code| self.by_alpha2(&code));
        }

        let code = format!("+{prefix}");

        self.assigned().find(|country| country.has_calling_code(&code))
    }

    /// The ITU country codes (digits only) present in the dataset
    pub fn itu_codes(&self) -> BTreeSet<String> {
        self.countries
            .iter()
            .flat_map(|country| &country.calling_codes)
            .map(|code| code.country_code_digits().to_owned())
            .filter(|code| !code.is_empty())
            .collect()
    }
}

impl std::fmt::Debug for CountryDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountryDirectory")
            .field("countries", &self.countries.len())
            .finish()
    }
}
