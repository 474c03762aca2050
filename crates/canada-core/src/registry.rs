//! # Region Registry
//!
//! The ordered set of regions searchable under one [`RegistryConfig`]:
//! provinces in fixed order followed by territories in fixed order. When
//! the configuration excludes the designated province it is dropped from
//! the provinces segment before the two are concatenated.
//!
//! A registry is built once and never mutated. It only holds references to
//! `'static` records, so it is cheap to clone and safe to share between
//! threads.

use std::collections::BTreeMap;

use crate::config::RegistryConfig;
use crate::data::{DESIGNATED_PROVINCE, PROVINCES, TERRITORIES};
use crate::error::CanadaError;
use crate::field::{Field, FieldValue};
use crate::lookup::{self, Query};
use crate::region::{Locale, Region};

/// A field-to-field mapping produced by [`Registry::field_mapping`].
pub type FieldMapping = BTreeMap<FieldValue, FieldValue>;

/// The regions available under one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    config: RegistryConfig,
    regions: Vec<&'static Region>,
    province_count: usize,
}

impl Registry {
    /// Build the registry for `config`.
    pub fn new(config: RegistryConfig) -> Self {
        let provinces = PROVINCES.iter().copied().filter(|region| {
            !(config.exclude_designated_province && std::ptr::eq(*region, DESIGNATED_PROVINCE))
        });
        let mut regions: Vec<&'static Region> = provinces.collect();
        let province_count = regions.len();
        regions.extend(TERRITORIES.iter().copied());

        tracing::debug!(
            regions = regions.len(),
            locale = %config.locale,
            exclude_designated_province = config.exclude_designated_province,
            "built region registry"
        );

        Self {
            config,
            regions,
            province_count,
        }
    }

    /// Build a registry from [`RegistryConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(RegistryConfig::from_env())
    }

    /// The configuration this registry was built with.
    pub fn config(&self) -> RegistryConfig {
        self.config
    }

    /// Locale used for display names and name lookups.
    pub fn locale(&self) -> Locale {
        self.config.locale
    }

    /// All regions: provinces, then territories.
    pub fn all_regions(&self) -> &[&'static Region] {
        &self.regions
    }

    /// The provinces segment, in registry order.
    pub fn provinces(&self) -> &[&'static Region] {
        &self.regions[..self.province_count]
    }

    /// The territories segment, in registry order.
    pub fn territories(&self) -> &[&'static Region] {
        &self.regions[self.province_count..]
    }

    /// Number of searchable regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether the registry holds no regions.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Display name of `region` in the registry's locale.
    pub fn display_name(&self, region: &Region) -> &'static str {
        region.display_name(self.config.locale)
    }

    /// Phonetic key of `region` in the registry's locale.
    pub fn display_phonetic_key(&self, region: &Region) -> &'static str {
        region.display_phonetic_key(self.config.locale)
    }

    /// Resolve `query` to a single region. See [`crate::lookup`] for the
    /// classification and matching rules.
    ///
    /// # Errors
    ///
    /// [`CanadaError::NotFound`] when no region matches.
    pub fn lookup(
        &self,
        query: impl Into<Query>,
        field: Option<Field>,
    ) -> Result<&'static Region, CanadaError> {
        lookup::resolve(
            self.regions.iter().copied(),
            query,
            field,
            self.config.locale,
        )
    }

    /// Map each region's `from` value to its `to` value.
    ///
    /// Uses `regions` when given, otherwise the whole registry. When two
    /// regions share a `from` value the later region's entry replaces the
    /// earlier one; callers choosing non-unique key fields get one entry per
    /// distinct key.
    pub fn field_mapping(
        &self,
        from: Field,
        to: Field,
        regions: Option<&[&'static Region]>,
    ) -> FieldMapping {
        let locale = self.config.locale;
        regions
            .unwrap_or(&self.regions)
            .iter()
            .map(|region| (from.value(region, locale), to.value(region, locale)))
            .collect()
    }

    /// [`Registry::field_mapping`] with fields given by name.
    ///
    /// # Errors
    ///
    /// [`CanadaError::InvalidField`] if either name is not a region field.
    pub fn field_mapping_by_name(
        &self,
        from: &str,
        to: &str,
        regions: Option<&[&'static Region]>,
    ) -> Result<FieldMapping, CanadaError> {
        let from: Field = from.parse()?;
        let to: Field = to.parse()?;
        Ok(self.field_mapping(from, to, regions))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{NS, PE, QC, YT};

    fn abbrs(regions: &[&Region]) -> Vec<&'static str> {
        regions.iter().map(|r| r.abbr).collect()
    }

    #[test]
    fn default_order_is_provinces_then_territories() {
        let registry = Registry::default();
        assert_eq!(
            abbrs(registry.all_regions()),
            ["AB", "BC", "MB", "NB", "NL", "NS", "ON", "PE", "QC", "SK", "NT", "NU", "YT"]
        );
        assert_eq!(registry.provinces().len(), 10);
        assert_eq!(abbrs(registry.territories()), ["NT", "NU", "YT"]);
    }

    #[test]
    fn exclusion_drops_only_the_designated_province() {
        let config = RegistryConfig::default().excluding_designated_province(true);
        let registry = Registry::new(config);
        assert_eq!(registry.len(), 12);
        assert_eq!(registry.provinces().len(), 9);
        assert!(!registry.all_regions().contains(&&QC));
        assert_eq!(registry.territories().len(), 3);
    }

    #[test]
    fn display_name_uses_registry_locale() {
        let french = Registry::new(RegistryConfig::default().with_locale(Locale::French));
        assert_eq!(french.display_name(&PE), "Île-du-Prince-Édouard");
        assert_eq!(french.display_phonetic_key(&PE), "ILTPRNSTRT");
        assert_eq!(Registry::default().display_name(&PE), "Prince Edward Island");
    }

    #[test]
    fn lookup_delegates_with_locale() {
        let french = Registry::new(RegistryConfig::default().with_locale(Locale::French));
        assert_eq!(french.lookup("Nouvelle-Écosse", None), Ok(&NS));
        assert_eq!(french.lookup("YT", None), Ok(&YT));
    }

    #[test]
    fn mapping_later_duplicate_wins() {
        let registry = Registry::default();
        let mapping = registry.field_mapping(Field::CapitalTimeZone, Field::Abbr, None);
        assert_eq!(
            mapping.get(&FieldValue::Text("America/Halifax")),
            Some(&FieldValue::Text("PE"))
        );
    }

    #[test]
    fn mapping_over_subset() {
        let registry = Registry::default();
        let mapping = registry.field_mapping(Field::Abbr, Field::Name, Some(registry.territories()));
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping[&FieldValue::Text("NU")], FieldValue::Text("Nunavut"));
    }

    #[test]
    fn mapping_by_name_rejects_unknown_fields() {
        let registry = Registry::default();
        assert_eq!(
            registry.field_mapping_by_name("abbr", "population", None),
            Err(CanadaError::InvalidField("population".to_string()))
        );
        assert_eq!(
            registry.field_mapping_by_name("flag", "abbr", None),
            Err(CanadaError::InvalidField("flag".to_string()))
        );
    }
}
