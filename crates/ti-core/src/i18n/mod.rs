//! Static string localization.
//!
//! Exactly two locales. Lookup falls back from the active locale to English
//! and finally to the key itself, logging a warning for unknown keys.

mod translations;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::warn;

pub use translations::table;

/// A UI locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    En,
    Id,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;
}

impl FromStr for Locale {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "id" => Ok(Locale::Id),
            _ => Err(()),
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::Id => write!(f, "id"),
        }
    }
}

/// One translation entry, English plus Indonesian.
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    pub en: &'static str,
    pub id: &'static str,
}

impl Entry {
    fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Id => self.id,
        }
    }
}

/// Resolve a dotted key for a locale.
///
/// Unknown keys return the key itself (and warn); a key whose string for the
/// active locale is empty falls back to English, then to the key.
pub fn translate(key: &str, locale: Locale) -> String {
    let Some(entry) = table().get(key) else {
        warn!(key, "translation key not found");
        return key.to_string();
    };
    let text = entry.text(locale);
    if !text.is_empty() {
        return text.to_string();
    }
    if !entry.en.is_empty() {
        return entry.en.to_string();
    }
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys_per_locale() {
        assert_eq!(translate("register.title", Locale::En), "Create an account");
        assert_eq!(translate("register.title", Locale::Id), "Buat akun");
    }

    #[test]
    fn unknown_key_returns_the_key_itself() {
        assert_eq!(translate("no.such.key", Locale::Id), "no.such.key");
    }

    #[test]
    fn locale_parsing_is_strict() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("id".parse::<Locale>(), Ok(Locale::Id));
        assert!("fr".parse::<Locale>().is_err());
        assert!("EN".parse::<Locale>().is_err());
    }

    #[test]
    fn every_entry_has_both_strings() {
        for (key, entry) in table().iter() {
            assert!(!entry.en.is_empty(), "missing en for {key}");
            assert!(!entry.id.is_empty(), "missing id for {key}");
        }
    }
}
