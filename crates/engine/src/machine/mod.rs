// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! The input state machine
//!
//! [`PhoneInput`] owns the [`PhoneDraft`] and the [`SearchState`] of one widget
//! instance. Every event is handled to completion by [`PhoneInput::handle`], which
//! returns at most one outward [`Message`].

use crate::directory::CountryDirectory;
use crate::error::{Error, Result};
use crate::formatter::{self, Formatted};
use crate::normalizer::{is_phone_like, normalize};
use crate::oracle::{LibPhonenumber, PhoneOracle};
use crate::search::CountrySearchIndex;
use crate::validator::Validator;
use shared::settings::Settings;
use std::sync::Arc;
use types::{flag_code, Alpha2, CallingCode, Country, ValidationResult};
use validator::Validate;

pub mod incoming;
pub mod outgoing;
mod state;

pub use incoming::Event;
pub use outgoing::Message;
pub use state::{Mode, PhoneDraft, SearchState};

use incoming::{Input, PickCountry, PointerDown, SetValue, TypeDigit, TypeText};
use outgoing::{Changed, Cleared};

/// A single phone input widget
pub struct PhoneInput<O = LibPhonenumber> {
    directory: Arc<CountryDirectory>,
    oracle: O,
    validator: Validator,
    index: CountrySearchIndex,
    disabled: bool,

    draft: PhoneDraft,
    search: SearchState,

    focused: bool,
    pointer_down_inside: bool,
}

impl PhoneInput<LibPhonenumber> {
    /// Mount a widget backed by the `phonenumber` crate
    pub fn new(
        directory: Arc<CountryDirectory>,
        settings: &Settings,
        value: Option<&str>,
    ) -> Result<Self> {
        let oracle = LibPhonenumber::new(&directory);

        Self::mount(directory, oracle, settings, value)
    }
}

impl<O> PhoneInput<O>
where
    O: PhoneOracle,
{
    /// Mount a widget
    ///
    /// A supplied `value` is applied first. If no country could be attached from it,
    /// the configured default country gets selected. Mounting never emits a message.
    #[tracing::instrument(skip_all)]
    pub fn mount(
        directory: Arc<CountryDirectory>,
        oracle: O,
        settings: &Settings,
        value: Option<&str>,
    ) -> Result<Self> {
        settings.validate()?;

        let widget = &settings.widget;

        if let Some(unknown) = widget
            .default_country
            .iter()
            .chain(&widget.preferred_countries)
            .find(|code| !directory.by_alpha2(code).map_or(false, Country::is_assigned))
        {
            return Err(Error::UnknownCountry(unknown.clone()));
        }

        let index = CountrySearchIndex::new(directory.clone(), widget.preferred_countries.clone());

        let mut input = Self {
            directory,
            oracle,
            validator: Validator::new(settings.messages.clone()),
            index,
            disabled: widget.disabled,
            draft: PhoneDraft::initial(&settings.messages),
            search: SearchState::new(widget.paginate),
            focused: false,
            pointer_down_inside: false,
        };

        input.refresh_candidates();

        if let Some(value) = value {
            input.set_value(value);
        }

        if input.draft.selected_country.is_none() {
            if let Some(default_country) = &widget.default_country {
                let _ = input.pick(default_country, false);
            }
        }

        Ok(input)
    }

    /// Handle a single event, returns the change notification if the event committed one
    #[tracing::instrument(skip_all)]
    pub fn handle(&mut self, event: Event) -> Option<Message> {
        if self.disabled && event.is_user_input() {
            log::debug!("Ignoring user input on disabled widget");
            return None;
        }

        match event {
            Event::Input(Input {
                value,
                delete_backward,
            }) => self.input(value, delete_backward),
            Event::TypeDigit(TypeDigit { ch }) => {
                let mut text = self.field_text().to_owned();
                text.push(ch);

                self.input(text, false)
            }
            Event::TypeText(TypeText { text }) => {
                let text = format!("{}{}", self.field_text(), text);

                self.input(text, false)
            }
            Event::Backspace => {
                let mut text = self.field_text().to_owned();
                let _ = text.pop();

                self.input(text, true)
            }
            Event::Clear => self.input(String::new(), true),
            Event::Focus => {
                self.focus();
                None
            }
            Event::Blur => {
                self.focused = false;
                self.dismiss();
                None
            }
            Event::PointerDown(PointerDown { inside_dropdown }) => {
                if inside_dropdown {
                    self.pointer_down_inside = true;
                } else {
                    self.dismiss();
                }
                None
            }
            Event::PointerUp => {
                self.pointer_down_inside = false;
                None
            }
            Event::ToggleDropdown => {
                if self.search.open {
                    self.search.close();
                } else {
                    self.open_dropdown();
                }
                None
            }
            Event::PickCountry(PickCountry { alpha2, via_click }) => match alpha2 {
                Some(alpha2) => self.pick(&alpha2, via_click),
                None => Some(self.clear()),
            },
            Event::HighlightNext => {
                self.move_highlight(true);
                None
            }
            Event::HighlightPrevious => {
                self.move_highlight(false);
                None
            }
            Event::ConfirmHighlight => {
                let alpha2 = self
                    .search
                    .open
                    .then(|| self.search.highlighted_country())
                    .flatten()
                    .map(|country| country.alpha2.clone())?;

                self.pick(&alpha2, true)
            }
            Event::ShowMore => {
                if self.search.open && self.search.has_more() {
                    self.search.page += 1;
                }
                None
            }
            Event::SetValue(SetValue { value }) => {
                self.set_value(&value);
                None
            }
        }
    }

    pub fn draft(&self) -> &PhoneDraft {
        &self.draft
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn mode(&self) -> Mode {
        if self.search.open {
            Mode::Browsing
        } else if self.focused {
            Mode::Composing
        } else {
            Mode::Idle
        }
    }

    /// Flag asset code of the selected country
    pub fn flag(&self) -> &str {
        flag_code(self.draft.selected_country.as_ref())
    }

    /// The text shown in the field, the query while the dropdown is open
    pub fn field_text(&self) -> &str {
        if self.search.open {
            &self.search.query
        } else {
            &self.draft.international_display
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn directory(&self) -> &CountryDirectory {
        &self.directory
    }

    fn input(&mut self, value: String, delete_backward: bool) -> Option<Message> {
        self.focused = true;

        if !is_phone_like(&value) {
            self.typeahead(value);
            return None;
        }

        self.search.close();

        if value.trim().is_empty() {
            return Some(self.clear());
        }

        let digits = normalize(&value).digits;

        if delete_backward {
            // Once the calling code is (partially) deleted the text no longer determines
            // the country, deleting never attaches a country either
            let keeps_country = self
                .draft
                .selected_country
                .as_ref()
                .and_then(Country::primary_calling_code)
                .map_or(false, |code| digits.len() > code.digits().len());

            if !keeps_country {
                return Some(self.detach(value));
            }
        }

        Some(self.compose(value, &digits))
    }

    /// Resolve the country from `digits` and format the number for it
    fn compose(&mut self, value: String, digits: &str) -> Message {
        let probe = formatter::format(&self.oracle, None, digits);

        let resolved = self
            .directory
            .resolve_by_calling_code(probe.calling_code_digits())
            .cloned();

        let country = resolved.or_else(|| {
            self.draft.selected_country.clone().filter(|country| {
                country
                    .primary_calling_code()
                    .map_or(false, |code| digits.starts_with(&code.digits()))
            })
        });

        let Some(country) = country else {
            log::debug!("No country for the entered calling code");
            return self.detach(value);
        };

        let formatted = formatter::format(&self.oracle, Some(&country), digits);
        let national_digits = national_digits(&country, &formatted, digits);
        let validation = self
            .validator
            .validate(&self.oracle, Some(&country), &formatted.display);

        self.select(Some(country));

        self.draft.raw_input = value;
        self.draft.national_digits = national_digits;
        self.draft.international_display = formatted.display;
        self.draft.apply_validation(&validation);

        Message::Changed(self.changed(validation))
    }

    /// Drop the selected country and echo `value` verbatim
    ///
    /// The national digits are kept so picking a country afterwards restores the number.
    fn detach(&mut self, value: String) -> Message {
        self.select(None);

        self.draft.raw_input = value.clone();
        self.draft.international_display = value;

        let validation = self.validator.no_country();
        self.draft.apply_validation(&validation);

        Message::Changed(self.changed(validation))
    }

    /// Reset the draft and reopen the dropdown with the full list
    fn clear(&mut self) -> Message {
        self.draft = PhoneDraft::initial(self.validator.messages());
        self.index.pin(None);
        self.open_dropdown();

        Message::Cleared(Cleared::new(self.validator.no_country()))
    }

    fn pick(&mut self, alpha2: &Alpha2, via_click: bool) -> Option<Message> {
        let Some(country) = self
            .directory
            .by_alpha2(alpha2)
            .filter(|country| country.is_assigned())
            .cloned()
        else {
            log::warn!("Ignoring pick of unknown or unassigned country {}", alpha2);
            return None;
        };

        let calling_code = country
            .primary_calling_code()
            .map(CallingCode::digits)
            .unwrap_or_default();
        let digits = format!("{}{}", calling_code, self.draft.national_digits);

        let formatted = formatter::format(&self.oracle, Some(&country), &digits);
        let validation = self
            .validator
            .validate(&self.oracle, Some(&country), &formatted.display);

        log::debug!("Picked country {}", country.alpha2);

        self.select(Some(country));

        self.draft.raw_input = formatted.display.clone();
        self.draft.international_display = formatted.display;
        self.draft.apply_validation(&validation);

        self.search.close();
        self.search.query.clear();
        self.refresh_candidates();

        if via_click || !self.draft.national_digits.is_empty() {
            Some(Message::Changed(self.changed(validation)))
        } else {
            None
        }
    }

    fn set_value(&mut self, value: &str) {
        if value.trim().is_empty() {
            self.draft = PhoneDraft::initial(self.validator.messages());
            self.index.pin(None);
            self.refresh_candidates();
            return;
        }

        let digits = normalize(value).digits;

        // Pushed values are not echoed back
        let _ = self.compose(value.to_owned(), &digits);
    }

    fn typeahead(&mut self, query: String) {
        if !self.search.open {
            self.search.open = true;
            self.search.page = 1;
        }

        self.search.query = query;
        self.search.highlighted = None;
        self.refresh_candidates();
    }

    fn focus(&mut self) {
        self.focused = true;

        if self.draft.international_display.is_empty() && self.draft.selected_country.is_none() {
            self.open_dropdown();
        }
    }

    /// Close the dropdown unless a pointer interaction started inside of it
    fn dismiss(&mut self) {
        if !self.pointer_down_inside {
            self.search.close();
        }
    }

    fn open_dropdown(&mut self) {
        self.search.open = true;
        self.search.query.clear();
        self.search.highlighted = None;
        self.search.page = 1;
        self.refresh_candidates();
    }

    fn move_highlight(&mut self, forward: bool) {
        let len = self.search.visible().len();

        if !self.search.open || len == 0 {
            return;
        }

        self.search.highlighted = Some(match (self.search.highlighted, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1).min(len - 1),
            (Some(i), false) => i.saturating_sub(1),
        });
    }

    /// Attach `country`, a newly selected country is pinned to the preferred ordering
    fn select(&mut self, country: Option<Country>) {
        self.draft.calling_code = country
            .as_ref()
            .and_then(Country::primary_calling_code)
            .map(ToString::to_string)
            .unwrap_or_default();

        let newly_selected = country.is_some()
            && self.draft.alpha2() != country.as_ref().map(|country| &country.alpha2);

        if newly_selected {
            self.index.pin(country.as_ref());
            self.refresh_candidates();
        }

        self.draft.selected_country = country;
    }

    fn refresh_candidates(&mut self) {
        self.search.candidates = self.index.filter(&self.search.query);
        self.search.last_preferred = self.index.last_preferred().cloned();
    }

    fn changed(&self, validation: ValidationResult) -> Changed {
        Changed {
            country: self.draft.selected_country.clone(),
            validation,
            calling_code: self.draft.calling_code.clone(),
            national_number: self.draft.national_digits.clone(),
            international: self.draft.international_display.clone(),
        }
    }
}

impl<O> std::fmt::Debug for PhoneInput<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhoneInput")
            .field("disabled", &self.disabled)
            .field("draft", &self.draft)
            .field("search", &self.search)
            .field("focused", &self.focused)
            .finish()
    }
}

/// The digits after the primary calling code of `country`
fn national_digits(country: &Country, formatted: &Formatted, digits: &str) -> String {
    country
        .primary_calling_code()
        .and_then(|code| digits.strip_prefix(code.digits().as_str()))
        .or_else(|| digits.strip_prefix(formatted.calling_code_digits()))
        .unwrap_or_default()
        .to_owned()
}
