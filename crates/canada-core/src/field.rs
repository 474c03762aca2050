//! # Region Fields
//!
//! [`Field`] enumerates every attribute that can be read from a [`Region`] by
//! name. Lookups and mappings select attributes through this enum instead of
//! by string, so an unknown attribute is a parse-time
//! [`CanadaError::InvalidField`] rather than a failure deep inside a scan.
//!
//! Two fields are derived rather than stored: [`Field::Name`] and
//! [`Field::PhoneticKey`] resolve to the English or French value depending
//! on the [`Locale`] passed to [`Field::value`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CanadaError;
use crate::region::{Locale, Region};

/// A readable attribute of a [`Region`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Locale-selected display name.
    Name,
    /// Locale-selected phonetic key.
    PhoneticKey,
    NameEn,
    NameFr,
    PhoneticKeyEn,
    PhoneticKeyFr,
    Abbr,
    AbbrEn,
    AbbrFr,
    NumericCode,
    IsoSubdivisionCode,
    IsTerritory,
    Capital,
    CapitalTimeZone,
    TimeZones,
    ConfederationYear,
}

impl Field {
    /// Returns every field in declaration order.
    pub fn all() -> &'static [Field] {
        &[
            Self::Name,
            Self::PhoneticKey,
            Self::NameEn,
            Self::NameFr,
            Self::PhoneticKeyEn,
            Self::PhoneticKeyFr,
            Self::Abbr,
            Self::AbbrEn,
            Self::AbbrFr,
            Self::NumericCode,
            Self::IsoSubdivisionCode,
            Self::IsTerritory,
            Self::Capital,
            Self::CapitalTimeZone,
            Self::TimeZones,
            Self::ConfederationYear,
        ]
    }

    /// Returns the snake_case identifier for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PhoneticKey => "phonetic_key",
            Self::NameEn => "name_en",
            Self::NameFr => "name_fr",
            Self::PhoneticKeyEn => "phonetic_key_en",
            Self::PhoneticKeyFr => "phonetic_key_fr",
            Self::Abbr => "abbr",
            Self::AbbrEn => "abbr_en",
            Self::AbbrFr => "abbr_fr",
            Self::NumericCode => "numeric_code",
            Self::IsoSubdivisionCode => "iso_subdivision_code",
            Self::IsTerritory => "is_territory",
            Self::Capital => "capital",
            Self::CapitalTimeZone => "capital_time_zone",
            Self::TimeZones => "time_zones",
            Self::ConfederationYear => "confederation_year",
        }
    }

    /// Read this field from `region`.
    ///
    /// `locale` only affects [`Field::Name`] and [`Field::PhoneticKey`].
    pub fn value(&self, region: &Region, locale: Locale) -> FieldValue {
        match self {
            Self::Name => FieldValue::Text(region.display_name(locale)),
            Self::PhoneticKey => FieldValue::Text(region.display_phonetic_key(locale)),
            Self::NameEn => FieldValue::Text(region.name_en),
            Self::NameFr => FieldValue::Text(region.name_fr),
            Self::PhoneticKeyEn => FieldValue::Text(region.phonetic_key_en),
            Self::PhoneticKeyFr => FieldValue::Text(region.phonetic_key_fr),
            Self::Abbr => FieldValue::Text(region.abbr),
            Self::AbbrEn => FieldValue::Text(region.abbr_en),
            Self::AbbrFr => FieldValue::Text(region.abbr_fr),
            Self::NumericCode => FieldValue::Integer(region.numeric_code),
            Self::IsoSubdivisionCode => FieldValue::Text(region.iso_subdivision_code),
            Self::IsTerritory => FieldValue::Bool(region.is_territory),
            Self::Capital => region.capital.map_or(FieldValue::Null, FieldValue::Text),
            Self::CapitalTimeZone => region
                .capital_time_zone
                .map_or(FieldValue::Null, FieldValue::Text),
            Self::TimeZones => FieldValue::List(region.time_zones),
            Self::ConfederationYear => region
                .confederation_year
                .map_or(FieldValue::Null, |y| FieldValue::Integer(u32::from(y))),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CanadaError;

    /// Parse a field from its snake_case identifier.
    ///
    /// Also accepts the legacy names `nu_code`, `iso_code`, `capital_tz` and
    /// the `name_metaphone*` spellings of the phonetic key fields.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "phonetic_key" | "name_metaphone" => Ok(Self::PhoneticKey),
            "name_en" => Ok(Self::NameEn),
            "name_fr" => Ok(Self::NameFr),
            "phonetic_key_en" | "name_metaphone_en" => Ok(Self::PhoneticKeyEn),
            "phonetic_key_fr" | "name_metaphone_fr" => Ok(Self::PhoneticKeyFr),
            "abbr" => Ok(Self::Abbr),
            "abbr_en" => Ok(Self::AbbrEn),
            "abbr_fr" => Ok(Self::AbbrFr),
            "numeric_code" | "nu_code" => Ok(Self::NumericCode),
            "iso_subdivision_code" | "iso_code" => Ok(Self::IsoSubdivisionCode),
            "is_territory" => Ok(Self::IsTerritory),
            "capital" => Ok(Self::Capital),
            "capital_time_zone" | "capital_tz" => Ok(Self::CapitalTimeZone),
            "time_zones" => Ok(Self::TimeZones),
            "confederation_year" => Ok(Self::ConfederationYear),
            other => Err(CanadaError::InvalidField(other.to_string())),
        }
    }
}

/// The value of one [`Field`] on one [`Region`].
///
/// Ordered and hashable so values can key a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An absent optional attribute.
    Null,
    Bool(bool),
    Integer(u32),
    Text(&'static str),
    List(&'static [&'static str]),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(",")),
        }
    }
}
