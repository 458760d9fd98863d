// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Fixtures shared by the engine tests

use engine::prelude::*;
use shared::settings::Settings;
use std::sync::Arc;

/// Messages which are distinguishable from the defaults
pub fn messages() -> Messages {
    Messages {
        min_length: "too short".into(),
        max_length: "too long".into(),
        calling_code: "pick a country".into(),
        catch_all: "not a phone number".into(),
        valid: "valid".into(),
    }
}

/// Settings with the test [`messages`] and the given widget section
pub fn settings(widget: &str) -> Settings {
    let mut settings = Settings::from_toml(&format!("[widget]\n{widget}"))
        .expect("widget section must be valid TOML");

    settings.messages = messages();

    settings
}

pub fn directory() -> Arc<CountryDirectory> {
    Arc::new(CountryDirectory::bundled().expect("bundled dataset must decode"))
}

pub fn alpha2(code: &str) -> Alpha2 {
    code.parse().expect("invalid alpha-2 code")
}

/// Mount a widget over the bundled dataset
pub fn mount(widget: &str, value: Option<&str>) -> PhoneInput {
    PhoneInput::new(directory(), &settings(widget), value).expect("failed to mount widget")
}

/// Type `text` one character at a time, returns every emitted message
pub fn type_chars(input: &mut PhoneInput, text: &str) -> Vec<Message> {
    text.chars()
        .filter_map(|ch| input.handle(Event::TypeDigit(TypeDigit { ch })))
        .collect()
}

/// Press backspace `n` times, returns every emitted message
pub fn backspace(input: &mut PhoneInput, n: usize) -> Vec<Message> {
    (0..n)
        .filter_map(|_| input.handle(Event::Backspace))
        .collect()
}

pub fn pick(input: &mut PhoneInput, code: &str) -> Option<Message> {
    input.handle(Event::PickCountry(PickCountry {
        alpha2: Some(alpha2(code)),
        via_click: true,
    }))
}
