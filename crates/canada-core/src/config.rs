//! # Registry Configuration
//!
//! Locale and exclusion behaviour are explicit values handed to
//! [`Registry::new`](crate::registry::Registry::new). [`RegistryConfig::from_env`]
//! exists for callers that want the process-environment convention; once a
//! registry is built its configuration does not change.

use serde::{Deserialize, Serialize};

use crate::region::Locale;

/// Selects French display names and name matching when set.
pub const FRANCOPHONE_VAR: &str = "FRANCOPHONE";

/// Removes the designated province from the registry when set.
pub const EXCLUDE_DESIGNATED_PROVINCE_VAR: &str = "EXCLUDE_DESIGNATED_PROVINCE";

/// Configuration for building a [`Registry`](crate::registry::Registry).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Language of display names and name-based lookups.
    pub locale: Locale,
    /// Omit the designated province from the provinces segment.
    pub exclude_designated_province: bool,
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables (a variable set to any non-empty value counts as enabled):
    /// - `FRANCOPHONE`: French locale.
    /// - `EXCLUDE_DESIGNATED_PROVINCE`: drop the designated province.
    pub fn from_env() -> Self {
        let locale = if env_flag(FRANCOPHONE_VAR) {
            Locale::French
        } else {
            Locale::English
        };
        Self {
            locale,
            exclude_designated_province: env_flag(EXCLUDE_DESIGNATED_PROVINCE_VAR),
        }
    }

    /// Replace the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set whether the designated province is excluded.
    pub fn excluding_designated_province(mut self, exclude: bool) -> Self {
        self.exclude_designated_province = exclude;
        self
    }
}

fn env_flag(var: &str) -> bool {
    is_truthy(std::env::var_os(var).as_deref())
}

fn is_truthy(value: Option<&std::ffi::OsStr>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;
    use std::sync::Mutex;

    // Serializes tests that mutate the process environment.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_env<T>(vars: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for (name, value) in vars {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
        let result = f();
        for (name, _) in vars {
            std::env::remove_var(name);
        }
        result
    }

    #[test]
    fn default_is_english_and_complete() {
        let config = RegistryConfig::default();
        assert_eq!(config.locale, Locale::English);
        assert!(!config.exclude_designated_province);
    }

    #[test]
    fn builder_methods() {
        let config = RegistryConfig::default()
            .with_locale(Locale::French)
            .excluding_designated_province(true);
        assert_eq!(config.locale, Locale::French);
        assert!(config.exclude_designated_province);
    }

    #[test]
    fn presence_convention() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(OsStr::new(""))));
        assert!(is_truthy(Some(OsStr::new("1"))));
        // Any non-empty value enables the flag, including "0".
        assert!(is_truthy(Some(OsStr::new("0"))));
    }

    #[test]
    fn from_env_reads_francophone() {
        let config = with_env(
            &[(FRANCOPHONE_VAR, Some("1")), (EXCLUDE_DESIGNATED_PROVINCE_VAR, None)],
            RegistryConfig::from_env,
        );
        assert_eq!(config.locale, Locale::French);
        assert!(!config.exclude_designated_province);
    }

    #[test]
    fn from_env_reads_exclusion() {
        let config = with_env(
            &[(FRANCOPHONE_VAR, None), (EXCLUDE_DESIGNATED_PROVINCE_VAR, Some("yes"))],
            RegistryConfig::from_env,
        );
        assert_eq!(config.locale, Locale::English);
        assert!(config.exclude_designated_province);
    }

    #[test]
    fn from_env_empty_values_are_disabled() {
        let config = with_env(
            &[(FRANCOPHONE_VAR, Some("")), (EXCLUDE_DESIGNATED_PROVINCE_VAR, Some(""))],
            RegistryConfig::from_env,
        );
        assert_eq!(config, RegistryConfig::default());
    }
}
