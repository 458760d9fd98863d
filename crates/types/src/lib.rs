// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Data types for the phone input engine.
//!
//! This crate contains the plain values that are passed between the country
//! directory, the validator and the presentation layer that renders the widget.
//!
//! # Features
//!
//! ## `default`
//!
//! Depends on:
//! - `serde`
//!
//! ## `serde`
//!
//! Derives [`serde::Serialize`] and [`serde::Deserialize`] for all types, so they
//! can be read from the bundled country dataset and the settings file and be sent
//! to the presentation layer. Also derives [`validator::Validate`] for the
//! user facing [`Messages`].

#![deny(
    bad_style,
    dead_code,
    improper_ctypes,
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    unused_qualifications,
    while_true
)]

mod calling_code;
mod country;
mod flag;
mod validation;

pub use calling_code::CallingCode;
pub use country::{Alpha2, Country, CountryStatus, ParseAlpha2Error};
pub use flag::{flag_code, UNKNOWN_FLAG};
pub use validation::{Messages, ValidationResult};

mod imports {
    #[cfg(feature = "serde")]
    pub use {
        serde::{Deserialize, Serialize},
        validator::Validate,
    };
}
