// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Contains the widget settings.
//!
//! The settings are set with a TOML config file. Settings specified in the config file
//! can be overwritten by environment variables. To do so, set an environment variable
//! with the prefix `PHONE_INPUT_` followed by the field names you want to set. Nested fields are separated by two underscores `__`.
//! ```sh
//! PHONE_INPUT_<field>__<field-of-field>...
//! ```
//!
//! # Example
//!
//! set the `widget.default_country` field:
//! ```sh
//! PHONE_INPUT_WIDGET__DEFAULT_COUNTRY=AE
//! ```
//!
//! # Note
//!
//! Fields set via environment variables do not affect the underlying config file.
//!
//! # Implementation Details:
//!
//! Every setting category implements [`Default`], a missing config file yields the default settings.
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use types::{Alpha2, Messages};
use validator::Validate;

const ENV_PREFIX: &str = "PHONE_INPUT";

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Settings {
    #[serde(default)]
    #[validate]
    pub widget: Widget,

    #[serde(default)]
    #[validate]
    pub messages: Messages,

    #[serde(default)]
    pub logging: Logging,
}

impl Settings {
    /// Creates a new Settings instance from the provided TOML file.
    /// Specific fields can be set or overwritten with environment variables (See module level docs for more details).
    pub fn load(file_name: &Path) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from(file_name).required(false)))
    }

    /// Creates a new Settings instance from TOML source text, environment overrides still apply
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::build(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let env = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__");

        builder.add_source(env).build()?.try_deserialize()
    }
}

/// Behavior of a single widget instance
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct Widget {
    /// Country that is selected when the widget is mounted without a number
    #[serde(default)]
    pub default_country: Option<Alpha2>,

    /// Countries listed first in the dropdown, after the selected country
    #[serde(default)]
    pub preferred_countries: Vec<Alpha2>,

    /// Ignore all user input
    #[serde(default)]
    pub disabled: bool,

    /// Number of dropdown entries shown per page, all entries are shown if unset
    #[serde(default)]
    #[validate(range(min = 1))]
    pub paginate: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Logging {
    #[serde(default = "default_directives")]
    pub default_directives: Vec<String>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            default_directives: default_directives(),
        }
    }
}

fn default_directives() -> Vec<String> {
    vec!["phone_input=INFO".into(), "phone_input_core=INFO".into()]
}
