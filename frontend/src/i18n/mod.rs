//! English/French copy for the whole page.

mod context;
mod dictionary;

pub use context::{use_language, LanguageProvider};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::En => Self::Fr,
            Self::Fr => Self::En,
        }
    }
}

/// Looks `key` up for `language`. Unknown keys come back unchanged so a
/// missing entry shows up on the page instead of an empty string.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    match dictionary::lookup(key) {
        Some((en, fr)) => match language {
            Language::En => en,
            Language::Fr => fr,
        },
        None => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_storage_values() {
        assert_eq!(Language::from_code("fr"), Some(Language::Fr));
        assert_eq!(Language::from_code(Language::En.code()), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn translates_known_keys() {
        assert_eq!(translate(Language::En, "nav.technology"), "TECHNOLOGY");
        assert_eq!(translate(Language::Fr, "nav.technology"), "TECHNOLOGIE");
        assert_eq!(translate(Language::Fr, "contact.next"), "Suivant");
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(translate(Language::Fr, "missing.key"), "missing.key");
    }

    #[test]
    fn every_entry_has_both_languages() {
        for (key, en, fr) in dictionary::ENTRIES {
            assert!(!en.is_empty(), "{} has no English text", key);
            assert!(!fr.is_empty(), "{} has no French text", key);
        }
    }
}
