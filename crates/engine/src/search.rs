// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Typeahead filtering of the country list
//!
//! The unfiltered list is the *preferred ordering*: the pinned (selected) country,
//! then the configured preferred countries, then every other assigned country in
//! dataset order. The ordering is cached and only recomputed when the pinned
//! country changes.

use crate::directory::CountryDirectory;
use regex::RegexBuilder;
use std::sync::Arc;
use types::{Alpha2, Country};

pub struct CountrySearchIndex {
    directory: Arc<CountryDirectory>,
    configured: Vec<Alpha2>,
    pinned: Option<Alpha2>,
    ordering: Vec<Country>,
    last_preferred: Option<Alpha2>,
}

impl CountrySearchIndex {
    /// Create the index, `configured` must only contain codes known to the directory
    pub fn new(directory: Arc<CountryDirectory>, configured: Vec<Alpha2>) -> Self {
        let mut index = Self {
            directory,
            configured,
            pinned: None,
            ordering: Vec::new(),
            last_preferred: None,
        };

        index.recompute();

        index
    }

    /// Pin `country` to the front of the preferred ordering, `None` removes the pin
    pub fn pin(&mut self, country: Option<&Country>) {
        let alpha2 = country.map(|country| country.alpha2.clone());

        if self.pinned == alpha2 {
            return;
        }

        self.pinned = alpha2;
        self.recompute();
    }

    pub fn pinned(&self) -> Option<&Alpha2> {
        self.pinned.as_ref()
    }

    /// The cached preferred ordering
    pub fn preferred(&self) -> &[Country] {
        &self.ordering
    }

    /// The last entry of the pinned block at the front of the preferred ordering
    pub fn last_preferred(&self) -> Option<&Alpha2> {
        self.last_preferred.as_ref()
    }

    /// Filter the assigned countries by `query`
    ///
    /// A blank query yields the preferred ordering. Otherwise the query is matched
    /// literally and case-insensitively against the name and calling codes of every
    /// assigned country, matches keep their dataset order.
    pub fn filter(&self, query: &str) -> Vec<Country> {
        let query = query.trim();

        if query.is_empty() {
            return self.ordering.clone();
        }

        let regex = match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        {
            Ok(regex) => regex,
            Err(e) => {
                log::warn!("Failed to build country search pattern, {}", e);
                return Vec::new();
            }
        };

        self.directory
            .assigned()
            .filter(|country| regex.is_match(&country.search_criteria()))
            .cloned()
            .collect()
    }

    fn recompute(&mut self) {
        let mut head: Vec<&Country> = Vec::new();

        let pinned = self
            .pinned
            .iter()
            .chain(&self.configured)
            .filter_map(|code| self.directory.by_alpha2(code))
            .filter(|country| country.is_assigned());

        for country in pinned {
            if !head.iter().any(|c| c.alpha2 == country.alpha2) {
                head.push(country);
            }
        }

        self.last_preferred = head.last().map(|country| country.alpha2.clone());

        let rest = self
            .directory
            .assigned()
            .filter(|country| !head.iter().any(|c| c.alpha2 == country.alpha2));

        self.ordering = head.iter().copied().chain(rest).cloned().collect();
    }
}

impl std::fmt::Debug for CountrySearchIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountrySearchIndex")
            .field("configured", &self.configured)
            .field("pinned", &self.pinned)
            .field("last_preferred", &self.last_preferred)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn alpha2(code: &str) -> Alpha2 {
        code.parse().unwrap()
    }

    fn codes(countries: &[Country]) -> Vec<&str> {
        countries.iter().map(|c| c.alpha2.as_str()).collect()
    }

    fn index(configured: &[&str]) -> CountrySearchIndex {
        let directory = Arc::new(CountryDirectory::bundled().unwrap());

        CountrySearchIndex::new(directory, configured.iter().map(|c| alpha2(c)).collect())
    }

    #[test]
    fn unpinned_ordering_is_dataset_order() {
        let index = index(&[]);
        let directory = CountryDirectory::bundled().unwrap();

        let expected: Vec<_> = directory.assigned().cloned().collect();

        assert_eq!(index.filter(""), expected);
        assert_eq!(index.last_preferred(), None);
    }

    #[test]
    fn selected_country_first() {
        let mut index = index(&[]);
        let directory = CountryDirectory::bundled().unwrap();

        index.pin(directory.by_alpha2(&alpha2("GB")));

        let ordering = index.filter("   ");

        assert_eq!(ordering[0].alpha2.as_str(), "GB");
        assert_eq!(ordering.len(), directory.assigned().count());
        assert_eq!(index.last_preferred(), Some(&alpha2("GB")));
    }

    #[test]
    fn configured_after_selected() {
        let mut index = index(&["DE", "AT", "GB"]);
        let directory = CountryDirectory::bundled().unwrap();

        assert_eq!(codes(&index.filter("")[..3]), vec!["DE", "AT", "GB"]);
        assert_eq!(index.last_preferred(), Some(&alpha2("GB")));

        index.pin(directory.by_alpha2(&alpha2("AT")));

        assert_eq!(codes(&index.filter("")[..4]), vec!["AT", "DE", "GB", "AD"]);
        assert_eq!(index.last_preferred(), Some(&alpha2("GB")));

        index.pin(None);

        assert_eq!(codes(&index.filter("")[..3]), vec!["DE", "AT", "GB"]);
    }

    #[test]
    fn unassigned_entries_are_never_pinned() {
        let mut index = index(&["AN", "DE"]);
        let directory = CountryDirectory::bundled().unwrap();

        index.pin(directory.by_alpha2(&alpha2("AC")));

        let ordering = index.filter("");

        assert_eq!(codes(&ordering[..2]), vec!["DE", "AD"]);
        assert_eq!(ordering.len(), directory.assigned().count());
        assert!(ordering.iter().all(Country::is_assigned));
        assert_eq!(index.last_preferred(), Some(&alpha2("DE")));
    }

    #[test]
    fn no_match() {
        let index = index(&[]);

        assert!(index.filter("zzz-not-a-country").is_empty());
    }

    #[test]
    fn matches_name_case_insensitive() {
        let index = index(&["GB"]);

        assert_eq!(codes(&index.filter("gErMaNy")), vec!["DE"]);
        // matches keep dataset order, the configured preference does not apply
        assert_eq!(codes(&index.filter("united")), vec!["AE", "GB", "TZ", "US"]);
    }

    #[test]
    fn matches_calling_code() {
        let index = index(&[]);

        assert_eq!(codes(&index.filter("+44")), vec!["GB", "GG", "IM", "JE"]);
        assert!(codes(&index.filter("+1 684")).contains(&"AS"));
    }

    #[test]
    fn metacharacters_are_literal() {
        let index = index(&[]);

        assert!(index.filter(".*").is_empty());
        assert!(index.filter("[").is_empty());
        assert_eq!(codes(&index.filter("(US)")), vec!["VI"]);
    }
}
