// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

/// Characters users commonly type between the digits of a phone number
const SEPARATORS: [char; 6] = [' ', '-', '(', ')', '.', '/'];

/// Canonical form of raw user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// All digits of the input, every other character removed
    pub digits: String,

    /// `true` if the trimmed input is non-empty and consists of digits only
    pub looks_numeric: bool,
}

impl Normalized {
    /// An input without any digits, used as the "clear" signal
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

pub fn normalize(raw: &str) -> Normalized {
    let trimmed = raw.trim();

    Normalized {
        digits: raw.chars().filter(char::is_ascii_digit).collect(),
        looks_numeric: !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()),
    }
}

/// Decides whether an input is handled as a phone number or as a country search
///
/// Empty input, input starting with `+` and input made of digits and common
/// separators are phone numbers; anything else is a typeahead query.
pub fn is_phone_like(raw: &str) -> bool {
    let trimmed = raw.trim();

    if trimmed.is_empty() || trimmed.starts_with('+') {
        return true;
    }

    let stripped: String = trimmed.chars().filter(|c| !SEPARATORS.contains(c)).collect();

    normalize(&stripped).looks_numeric
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn strips_non_digits() {
        let normalized = normalize("+62 857-3727-3839");

        assert_eq!(normalized.digits, "6285737273839");
        assert!(!normalized.looks_numeric);
    }

    #[test]
    fn numeric() {
        assert!(normalize(" 0441 ").looks_numeric);
        assert!(!normalize("").looks_numeric);
        assert!(!normalize("   ").looks_numeric);
        assert!(!normalize("12a").looks_numeric);
    }

    #[test]
    fn empty_is_clear_signal() {
        assert!(normalize("").is_empty());
        assert!(normalize("+").is_empty());
        assert!(!normalize("+4").is_empty());
    }

    #[test]
    fn phone_like() {
        assert!(is_phone_like(""));
        assert!(is_phone_like("+"));
        assert!(is_phone_like("+44 7911"));
        assert!(is_phone_like("(030) 1234-56"));
        assert!(is_phone_like("555"));
        assert!(!is_phone_like("ger"));
        assert!(!is_phone_like("united 44"));
    }
}
