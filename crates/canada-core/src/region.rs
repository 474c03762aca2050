//! # Region Records
//!
//! A [`Region`] is one Canadian province or territory. Records are `'static`
//! literal data (see [`crate::data`]) and are never mutated; the registry and
//! resolver only ever hand out shared references to them.
//!
//! Display labels are not stored per record. [`Region::display_name`] and
//! [`Region::display_phonetic_key`] select the English or French value from a
//! [`Locale`] supplied by the caller at read time.

use serde::{Deserialize, Serialize};

/// Language used for display names and name-based lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// English labels (the default).
    #[default]
    English,
    /// French labels.
    French,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => f.write_str("en"),
            Self::French => f.write_str("fr"),
        }
    }
}

/// A Canadian province or territory.
#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Region {
    /// Name in English.
    pub name_en: &'static str,
    /// Metaphone encoding of `name_en`.
    pub phonetic_key_en: &'static str,
    /// Name in French.
    pub name_fr: &'static str,
    /// Metaphone encoding of `name_fr`.
    pub phonetic_key_fr: &'static str,
    /// Two-letter postal abbreviation, unique across the registry.
    pub abbr: &'static str,
    /// Traditional English abbreviation (display only).
    pub abbr_en: &'static str,
    /// Traditional French abbreviation (display only).
    pub abbr_fr: &'static str,
    /// Statistics Canada SGC code, unique across the registry.
    pub numeric_code: u32,
    /// ISO 3166-2 subdivision code, `CA-XX`.
    pub iso_subdivision_code: &'static str,
    pub is_territory: bool,
    pub capital: Option<&'static str>,
    /// IANA zone of the capital.
    pub capital_time_zone: Option<&'static str>,
    /// IANA zones covering the region.
    pub time_zones: &'static [&'static str],
    /// Year the region joined Confederation.
    pub confederation_year: Option<u16>,
}

impl Region {
    /// Name in the requested locale.
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.name_en,
            Locale::French => self.name_fr,
        }
    }

    /// Phonetic key of [`Region::display_name`] in the requested locale.
    pub fn display_phonetic_key(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.phonetic_key_en,
            Locale::French => self.phonetic_key_fr,
        }
    }

    /// Traditional abbreviation in the requested locale.
    pub fn display_abbr(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.abbr_en,
            Locale::French => self.abbr_fr,
        }
    }

    /// Whether this region is a province rather than a territory.
    pub fn is_province(&self) -> bool {
        !self.is_territory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{NS, YT};

    #[test]
    fn display_name_follows_locale() {
        assert_eq!(NS.display_name(Locale::English), "Nova Scotia");
        assert_eq!(NS.display_name(Locale::French), "Nouvelle-Écosse");
        assert_eq!(NS.display_phonetic_key(Locale::English), "NF SKX");
        assert_eq!(NS.display_phonetic_key(Locale::French), "NFLKS");
        assert_eq!(NS.display_abbr(Locale::French), "N.-É.");
    }

    #[test]
    fn territory_classification() {
        assert!(YT.is_territory);
        assert!(!YT.is_province());
        assert!(NS.is_province());
    }

    #[test]
    fn locale_default_is_english() {
        assert_eq!(Locale::default(), Locale::English);
        assert_eq!(Locale::French.to_string(), "fr");
    }

    #[test]
    fn region_serializes_with_field_names() {
        let json = serde_json::to_value(&YT).unwrap();
        assert_eq!(json["abbr"], "YT");
        assert_eq!(json["numeric_code"], 60);
        assert_eq!(json["time_zones"][1], "America/Dawson");
        assert_eq!(json["confederation_year"], 1898);
    }
}
