// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::Country;

/// Flag code shown when no country is selected
pub const UNKNOWN_FLAG: &str = "WW";

/// Dataset entries without a flag asset of their own
const MISSING_FLAGS: [(&str, &str); 5] = [
    ("AQ", UNKNOWN_FLAG),
    ("BQ", "NL"),
    ("EH", "WW-AFR"),
    ("MF", "FR"),
    ("SH", "GB"),
];

/// Returns the flag asset code for the selected country
pub fn flag_code(country: Option<&Country>) -> &str {
    let Some(country) = country else {
        return UNKNOWN_FLAG;
    };

    MISSING_FLAGS
        .iter()
        .find(|(alpha2, _)| *alpha2 == country.alpha2.as_str())
        .map(|(_, flag)| *flag)
        .unwrap_or_else(|| country.alpha2.as_str())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{CallingCode, CountryStatus};
    use pretty_assertions::assert_eq;

    fn country(alpha2: &str) -> Country {
        Country {
            alpha2: alpha2.parse().unwrap(),
            name: alpha2.into(),
            calling_codes: vec![CallingCode::new("+0")],
            status: CountryStatus::Assigned,
        }
    }

    #[test]
    fn flags() {
        assert_eq!(flag_code(None), "WW");
        assert_eq!(flag_code(Some(&country("DE"))), "DE");
        assert_eq!(flag_code(Some(&country("EH"))), "WW-AFR");
        assert_eq!(flag_code(Some(&country("SH"))), "GB");
    }
}
