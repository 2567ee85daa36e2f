//! Display-name localization for bookers.
//!
//! There is no translation backend yet: the Korean rendering is a fixed
//! placeholder label wrapped around the booker's stored name.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const KO_PLACEHOLDER: &str = "이한결";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CountryCode {
    Ko,
    Ja,
    En,
    /// Any tag without a dedicated variant, kept lowercased.
    Other(String),
}

impl CountryCode {
    pub fn as_str(&self) -> &str {
        match self {
            CountryCode::Ko => "ko",
            CountryCode::Ja => "ja",
            CountryCode::En => "en",
            CountryCode::Other(tag) => tag,
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Unknown tags are not an error; they just have no formatting rule.
impl FromStr for CountryCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_ascii_lowercase();
        Ok(match tag.as_str() {
            "ko" => CountryCode::Ko,
            "ja" => CountryCode::Ja,
            "en" => CountryCode::En,
            _ => CountryCode::Other(tag),
        })
    }
}

/// Renders `name` for `country_code`, or `None` when no rule exists for it.
///
/// Only `ko` has a rule. The output does not depend on any translation of
/// `name`; it is the stub label with the stored name in parentheses.
pub fn translate_name(name: &str, country_code: &CountryCode) -> Option<String> {
    match country_code {
        CountryCode::Ko => Some(format!("{KO_PLACEHOLDER}({name})")),
        _ => None,
    }
}
