// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use serde::Serialize;
use types::{Country, ValidationResult};

/// Change notifications, at most one per handled event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "message", rename_all = "snake_case")]
pub enum Message {
    Changed(Changed),
    Cleared(Cleared),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Changed {
    pub country: Option<Country>,
    pub validation: ValidationResult,
    pub calling_code: String,
    pub national_number: String,
    pub international: String,
}

/// The widget holds no number anymore
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cleared {
    pub phone_number: String,
    pub validation: ValidationResult,
    pub calling_code: String,
    pub international: String,
}

impl Cleared {
    pub fn new(validation: ValidationResult) -> Self {
        Self {
            phone_number: String::new(),
            validation,
            calling_code: String::new(),
            international: String::new(),
        }
    }
}
