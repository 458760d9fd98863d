// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use serde::Serialize;
use types::{Alpha2, Country, Messages, ValidationResult};

/// The number being composed in the text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneDraft {
    /// The text last entered by the user or pushed in as value
    pub raw_input: String,

    /// Digits following the calling code of the attached country
    pub national_digits: String,

    /// The text shown in the field while the dropdown is closed
    pub international_display: String,

    pub selected_country: Option<Country>,

    /// Primary calling code of `selected_country`, empty without country
    pub calling_code: String,

    pub is_possible_number: bool,

    /// Friendly message of the latest validation
    pub message: String,
}

impl PhoneDraft {
    /// The draft of a freshly mounted widget
    pub fn initial(messages: &Messages) -> Self {
        Self {
            raw_input: String::new(),
            national_digits: String::new(),
            international_display: String::new(),
            selected_country: None,
            calling_code: String::new(),
            is_possible_number: false,
            message: messages.calling_code.clone(),
        }
    }

    pub fn alpha2(&self) -> Option<&Alpha2> {
        self.selected_country.as_ref().map(|country| &country.alpha2)
    }

    pub(crate) fn apply_validation(&mut self, validation: &ValidationResult) {
        self.is_possible_number = validation.valid;
        self.message = validation.friendly_message.clone();
    }
}

/// State of the country dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub open: bool,

    /// Filtered country list, a subset or reordering of the assigned countries
    pub candidates: Vec<Country>,

    /// Index into the visible candidates, `None` while nothing is highlighted
    pub highlighted: Option<usize>,

    /// Number of pages shown, starts at 1
    pub page: usize,

    /// Entries per page, every candidate is visible if `None`
    pub page_size: Option<usize>,

    /// Last entry of the preferred block, only meaningful while the query is empty
    pub last_preferred: Option<Alpha2>,
}

impl SearchState {
    pub(crate) fn new(page_size: Option<usize>) -> Self {
        Self {
            query: String::new(),
            open: false,
            candidates: Vec::new(),
            highlighted: None,
            page: 1,
            page_size,
            last_preferred: None,
        }
    }

    /// The candidates on the pages shown so far
    pub fn visible(&self) -> &[Country] {
        match self.page_size {
            Some(size) => {
                let end = size.saturating_mul(self.page).min(self.candidates.len());

                &self.candidates[..end]
            }
            None => &self.candidates,
        }
    }

    /// Returns `true` if further pages can be shown
    pub fn has_more(&self) -> bool {
        self.visible().len() < self.candidates.len()
    }

    pub fn highlighted_country(&self) -> Option<&Country> {
        self.highlighted.and_then(|i| self.visible().get(i))
    }

    /// Close the dropdown, drop the highlight and scroll back to the first page
    pub(crate) fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
        self.page = 1;
    }
}

/// Interaction mode, derived from the widget state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Closed and unfocused
    Idle,
    /// Typing a number, dropdown closed
    Composing,
    /// Dropdown open
    Browsing,
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::{CallingCode, CountryStatus};

    fn countries(n: usize) -> Vec<Country> {
        (0..n)
            .map(|i| Country {
                alpha2: format!("A{}", (b'A' + i as u8) as char).parse().unwrap(),
                name: format!("Country {i}"),
                calling_codes: vec![CallingCode::new(format!("+{}", 200 + i))],
                status: CountryStatus::Assigned,
            })
            .collect()
    }

    #[test]
    fn pagination() {
        let mut search = SearchState::new(Some(2));
        search.candidates = countries(5);

        assert_eq!(search.visible().len(), 2);
        assert!(search.has_more());

        search.page = 3;
        assert_eq!(search.visible().len(), 5);
        assert!(!search.has_more());

        search.close();
        assert_eq!(search.page, 1);
        assert_eq!(search.visible().len(), 2);
    }

    #[test]
    fn unpaginated() {
        let mut search = SearchState::new(None);
        search.candidates = countries(5);

        assert_eq!(search.visible().len(), 5);
        assert!(!search.has_more());
    }

    #[test]
    fn highlight_is_bound_to_visible() {
        let mut search = SearchState::new(Some(2));
        search.candidates = countries(5);

        search.highlighted = Some(1);
        assert_eq!(
            search.highlighted_country().map(|c| c.alpha2.as_str()),
            Some("AB")
        );

        search.highlighted = Some(3);
        assert_eq!(search.highlighted_country(), None);
    }

    #[test]
    fn initial_draft() {
        let messages = Messages::default();
        let draft = PhoneDraft::initial(&messages);

        assert_eq!(draft.alpha2(), None);
        assert_eq!(draft.message, messages.calling_code);
        assert!(!draft.is_possible_number);
    }
}
