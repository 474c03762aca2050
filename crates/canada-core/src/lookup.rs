//! # Lookup Resolver
//!
//! Resolves one loosely-typed query to exactly one [`Region`].
//!
//! ## Classification
//!
//! A single query value stands in for three key spaces. When no explicit
//! [`Field`] is given, the query's shape picks one:
//!
//! | Query shape                       | Field                  |
//! |-----------------------------------|------------------------|
//! | integer, or text of two digits    | [`Field::NumericCode`] |
//! | text of two ASCII letters         | [`Field::Abbr`]        |
//! | any other text                    | [`Field::Name`]        |
//!
//! Two-digit text is converted to an integer before the field is chosen,
//! even when the caller supplies the field.
//!
//! ## Matching
//!
//! [`Field::Name`] matches case-insensitively against the locale's display
//! name, or when the locale's stored phonetic key equals the
//! [`metaphone`] encoding of the query. Every other field compares the
//! region's value to the query exactly. The scan follows registry order and
//! the first match wins.

use serde::{Deserialize, Serialize};

use crate::error::CanadaError;
use crate::field::{Field, FieldValue};
use crate::phonetic::metaphone;
use crate::region::{Locale, Region};

/// A lookup key: a numeric code or free text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Query {
    Code(u32),
    Text(String),
}

impl Query {
    /// Convert two-digit text to a numeric code; leave anything else as is.
    pub fn classify(self) -> Self {
        match self {
            Self::Text(text) if is_two_digits(&text) => match text.parse() {
                Ok(code) => Self::Code(code),
                Err(_) => Self::Text(text),
            },
            other => other,
        }
    }

    /// The field a classified query targets when the caller names none.
    pub fn default_field(&self) -> Field {
        match self {
            Self::Code(_) => Field::NumericCode,
            Self::Text(text) if is_two_letters(text) => Field::Abbr,
            Self::Text(_) => Field::Name,
        }
    }

    fn equals(&self, value: FieldValue) -> bool {
        match (self, value) {
            (Self::Code(code), FieldValue::Integer(n)) => *code == n,
            (Self::Text(text), FieldValue::Text(s)) => text == s,
            _ => false,
        }
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<u32> for Query {
    fn from(code: u32) -> Self {
        Self::Code(code)
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Query {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Name matcher for one query: lowercased text plus its phonetic key.
struct NameMatcher {
    lowered: String,
    phonetic_key: String,
}

impl NameMatcher {
    fn new(text: &str) -> Self {
        let phonetic_key = metaphone(text);
        tracing::trace!(query = text, %phonetic_key, "encoded name query");
        Self {
            lowered: text.to_lowercase(),
            phonetic_key,
        }
    }

    fn matches(&self, region: &Region, locale: Locale) -> bool {
        region.display_name(locale).to_lowercase() == self.lowered
            || region.display_phonetic_key(locale) == self.phonetic_key
    }
}

/// Resolve `query` against `regions`, scanning in iteration order.
///
/// `locale` selects which name and phonetic key participate in
/// [`Field::Name`] matching; it is read on every call.
///
/// # Errors
///
/// Returns [`CanadaError::NotFound`] carrying the resolved field and the
/// classified query when no region matches.
pub fn resolve<I>(
    regions: I,
    query: impl Into<Query>,
    field: Option<Field>,
    locale: Locale,
) -> Result<&'static Region, CanadaError>
where
    I: IntoIterator<Item = &'static Region>,
{
    let query = query.into().classify();
    let field = field.unwrap_or_else(|| query.default_field());
    tracing::debug!(%field, %query, %locale, "resolving region");

    let name_matcher = match (&query, field) {
        (Query::Text(text), Field::Name) => Some(NameMatcher::new(text)),
        _ => None,
    };

    let found = regions.into_iter().find(|region| match &name_matcher {
        Some(matcher) => matcher.matches(region, locale),
        None => query.equals(field.value(region, locale)),
    });

    found.ok_or(CanadaError::NotFound { field, query })
}

fn is_two_digits(text: &str) -> bool {
    text.len() == 2 && text.bytes().all(|b| b.is_ascii_digit())
}

fn is_two_letters(text: &str) -> bool {
    text.len() == 2 && text.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AB, NL, NS, NU, ON, PE, PROVINCES, QC, TERRITORIES, YT};

    fn all() -> Vec<&'static Region> {
        PROVINCES.iter().chain(TERRITORIES.iter()).copied().collect()
    }

    #[test]
    fn two_digit_text_becomes_code() {
        assert_eq!(Query::from("24").classify(), Query::Code(24));
        assert_eq!(Query::from("07").classify(), Query::Code(7));
        assert_eq!(Query::from("240").classify(), Query::from("240"));
        assert_eq!(Query::from("2a").classify(), Query::from("2a"));
        assert_eq!(Query::from(" 24").classify(), Query::from(" 24"));
    }

    #[test]
    fn default_field_by_shape() {
        assert_eq!(Query::Code(35).default_field(), Field::NumericCode);
        assert_eq!(Query::from("on").default_field(), Field::Abbr);
        assert_eq!(Query::from("Ontario").default_field(), Field::Name);
        assert_eq!(Query::from("O").default_field(), Field::Name);
        assert_eq!(Query::from("é1").default_field(), Field::Name);
    }

    #[test]
    fn resolves_each_key_space() {
        let regions = all();
        assert_eq!(resolve(regions.clone(), 35u32, None, Locale::English), Ok(&ON));
        assert_eq!(resolve(regions.clone(), "35", None, Locale::English), Ok(&ON));
        assert_eq!(resolve(regions.clone(), "NU", None, Locale::English), Ok(&NU));
        assert_eq!(resolve(regions, "Yukon", None, Locale::English), Ok(&YT));
    }

    #[test]
    fn abbreviation_is_case_sensitive() {
        let err = resolve(all(), "qc", None, Locale::English).unwrap_err();
        assert_eq!(
            err,
            CanadaError::NotFound {
                field: Field::Abbr,
                query: Query::from("qc"),
            }
        );
    }

    #[test]
    fn name_is_case_insensitive() {
        assert_eq!(resolve(all(), "nova SCOTIA", None, Locale::English), Ok(&NS));
        assert_eq!(resolve(all(), "QUÉBEC", None, Locale::French), Ok(&QC));
    }

    #[test]
    fn phonetic_fallback_tolerates_misspelling() {
        assert_eq!(resolve(all(), "qeubec", None, Locale::English), Ok(&QC));
        assert_eq!(resolve(all(), "Prinse Edwerd Island", None, Locale::English), Ok(&PE));
        assert_eq!(resolve(all(), "terre-neuve-et-labradore", None, Locale::French), Ok(&NL));
    }

    #[test]
    fn name_matching_uses_locale() {
        assert!(resolve(all(), "Nouvelle-Écosse", None, Locale::English).is_err());
        assert_eq!(resolve(all(), "Nouvelle-Écosse", None, Locale::French), Ok(&NS));
        assert!(resolve(all(), "Nova Scotia", None, Locale::French).is_err());
    }

    #[test]
    fn explicit_field_overrides_classification() {
        assert_eq!(
            resolve(all(), "CA-AB", Some(Field::IsoSubdivisionCode), Locale::English),
            Ok(&AB)
        );
        assert_eq!(
            resolve(all(), "Iqaluit", Some(Field::Capital), Locale::English),
            Ok(&NU)
        );
        assert_eq!(
            resolve(all(), 1949u32, Some(Field::ConfederationYear), Locale::English),
            Ok(&NL)
        );
        assert_eq!(
            resolve(all(), "Québec", Some(Field::NameFr), Locale::English),
            Ok(&QC)
        );
    }

    #[test]
    fn explicit_field_still_converts_digits() {
        let err = resolve(all(), "24", Some(Field::Abbr), Locale::English).unwrap_err();
        assert_eq!(
            err,
            CanadaError::NotFound {
                field: Field::Abbr,
                query: Query::Code(24),
            }
        );
    }

    #[test]
    fn first_match_wins_for_shared_values() {
        // Both Nova Scotia and Prince Edward Island use America/Halifax.
        assert_eq!(
            resolve(all(), "America/Halifax", Some(Field::CapitalTimeZone), Locale::English),
            Ok(&NS)
        );
    }

    #[test]
    fn lists_and_flags_never_match_queries() {
        assert!(resolve(all(), "America/Halifax", Some(Field::TimeZones), Locale::English).is_err());
        assert!(resolve(all(), "true", Some(Field::IsTerritory), Locale::English).is_err());
    }

    #[test]
    fn unknown_name_reports_name_field() {
        let err = resolve(all(), "Atlantis", None, Locale::English).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot find a province or territory identified by: name=Atlantis"
        );
    }

    #[test]
    fn empty_region_set_is_not_found() {
        let err = resolve(Vec::new(), "AB", None, Locale::English).unwrap_err();
        assert!(matches!(err, CanadaError::NotFound { field: Field::Abbr, .. }));
    }
}
