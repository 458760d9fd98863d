// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use serde::Deserialize;
use types::Alpha2;

/// Events delivered by the host environment
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Event {
    /// The text field now contains `value`
    Input(Input),
    /// A single character was typed at the end of the field
    TypeDigit(TypeDigit),
    /// Text was typed or pasted at the end of the field
    TypeText(TypeText),
    Backspace,
    /// The field was emptied
    Clear,
    Focus,
    Blur,
    PointerDown(PointerDown),
    PointerUp,
    ToggleDropdown,
    PickCountry(PickCountry),
    HighlightNext,
    HighlightPrevious,
    ConfirmHighlight,
    ShowMore,
    /// The embedding application pushed a new value
    SetValue(SetValue),
}

impl Event {
    /// Returns `true` for events caused by the user interacting with the widget
    ///
    /// Blur and pointer events as well as pushed values still apply to a disabled widget.
    pub fn is_user_input(&self) -> bool {
        !matches!(
            self,
            Event::Blur | Event::PointerDown(_) | Event::PointerUp | Event::SetValue(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Input {
    pub value: String,

    /// `true` if the edit removed characters
    #[serde(default)]
    pub delete_backward: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeDigit {
    pub ch: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeText {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PointerDown {
    /// `true` if the pointer went down inside the widget or its dropdown
    pub inside_dropdown: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickCountry {
    /// The picked entry, `None` is the empty entry which clears the widget
    #[serde(default)]
    pub alpha2: Option<Alpha2>,

    /// `true` if the entry was picked explicitly by the user
    #[serde(default = "default_via_click")]
    pub via_click: bool,
}

fn default_via_click() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetValue {
    pub value: String,
}
