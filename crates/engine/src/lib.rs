// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Phone number interpretation engine
//!
//! Turns arbitrary text typed into a phone input widget into an internationally
//! formatted number and the country it belongs to, without requiring the user to
//! pick a country first.
//!
//! # Example
//!
//! ```no_run
//! use phone_input_core::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> phone_input_core::Result<()> {
//! let directory = Arc::new(CountryDirectory::bundled()?);
//! let settings = Settings::default();
//!
//! let mut widget = PhoneInput::new(directory, &settings, None)?;
//!
//! for ch in "+447911123456".chars() {
//!     if let Some(message) = widget.handle(Event::TypeDigit(TypeDigit { ch })) {
//!         println!("{message:?}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod error;

pub mod directory;
pub mod formatter;
pub mod machine;
pub mod normalizer;
pub mod oracle;
pub mod search;
pub mod validator;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::directory::CountryDirectory;
    pub use crate::machine::incoming::{self, Event, Input, PickCountry, TypeDigit, TypeText};
    pub use crate::machine::outgoing::{self, Changed, Cleared, Message};
    pub use crate::machine::{Mode, PhoneDraft, PhoneInput, SearchState};
    pub use crate::oracle::{LibPhonenumber, PhoneOracle};

    pub use shared::settings::Settings;
    pub use types::{Alpha2, CallingCode, Country, CountryStatus, Messages, ValidationResult};
}
