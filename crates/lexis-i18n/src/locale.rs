//! Locale map configuration and preference resolution

use lexis_common::{LexisError, Result};
use std::collections::HashMap;
use tracing::debug;

/// Reserved key every locale map must contain
pub const DEFAULT_LOCALE_KEY: &str = "default";

/// Immutable mapping from locale code to dictionary resource URL
///
/// Configured once before the first resolution. The mandatory `"default"`
/// entry backs the final resolution tier, so resolution is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleMap {
    entries: HashMap<String, String>,
}

/// Outcome of resolving a raw locale preference against a [`LocaleMap`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    /// The raw preference string; persisted as-is no matter which tier matched
    pub code: String,
    /// Resource URL found at the matching tier
    pub url: String,
    /// The map key the preference matched (`"default"` on fallback)
    pub matched_key: String,
}

impl LocaleMap {
    /// Build a locale map, rejecting configurations without a `"default"` entry
    pub fn new(entries: HashMap<String, String>) -> Result<Self> {
        if !entries.contains_key(DEFAULT_LOCALE_KEY) {
            return Err(LexisError::config(format!(
                "locale map must contain a '{}' entry",
                DEFAULT_LOCALE_KEY
            )));
        }
        Ok(Self { entries })
    }

    /// Resolve a raw preference to a locale code and resource URL
    ///
    /// Matching is exact-string, in three tiers: the full preference, its
    /// two-character primary subtag, then `"default"`. No case or separator
    /// normalization is applied.
    pub fn resolve(&self, preference: &str) -> ResolvedLocale {
        if let Some(url) = self.entries.get(preference) {
            return ResolvedLocale {
                code: preference.to_string(),
                url: url.clone(),
                matched_key: preference.to_string(),
            };
        }

        if let Some(primary) = preference.get(..2) {
            if let Some(url) = self.entries.get(primary) {
                return ResolvedLocale {
                    code: preference.to_string(),
                    url: url.clone(),
                    matched_key: primary.to_string(),
                };
            }
        }

        debug!(
            preference,
            "no matching locale resource, falling back to default"
        );
        ResolvedLocale {
            code: preference.to_string(),
            url: self.entries[DEFAULT_LOCALE_KEY].clone(),
            matched_key: DEFAULT_LOCALE_KEY.to_string(),
        }
    }

    /// Resource URL configured for an exact locale code
    pub fn url_for(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// All configured locale codes
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of configured locales, including `"default"`
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries; unreachable for constructed maps
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> LocaleMap {
        let mut entries = HashMap::new();
        entries.insert("default".to_string(), "/i18n/resources-locale_en.json".to_string());
        entries.insert("en".to_string(), "/i18n/resources-locale_en.json".to_string());
        entries.insert("en_US".to_string(), "/i18n/resources-locale_en_US.json".to_string());
        entries.insert("fr".to_string(), "/i18n/resources-locale_fr.json".to_string());
        LocaleMap::new(entries).unwrap()
    }

    #[test]
    fn test_missing_default_is_rejected() {
        let mut entries = HashMap::new();
        entries.insert("en".to_string(), "/en.json".to_string());

        let err = LocaleMap::new(entries).unwrap_err();
        assert!(err.to_string().contains("default"));
    }

    #[test]
    fn test_exact_match_wins() {
        let resolved = sample_map().resolve("en_US");
        assert_eq!(resolved.code, "en_US");
        assert_eq!(resolved.matched_key, "en_US");
        assert_eq!(resolved.url, "/i18n/resources-locale_en_US.json");
    }

    #[test]
    fn test_primary_subtag_match() {
        let resolved = sample_map().resolve("fr_CA");
        assert_eq!(resolved.code, "fr_CA");
        assert_eq!(resolved.matched_key, "fr");
        assert_eq!(resolved.url, "/i18n/resources-locale_fr.json");
    }

    #[test]
    fn test_fallback_to_default() {
        let resolved = sample_map().resolve("ja_JP");
        assert_eq!(resolved.code, "ja_JP");
        assert_eq!(resolved.matched_key, "default");
        assert_eq!(resolved.url, "/i18n/resources-locale_en.json");
    }

    #[test]
    fn test_no_case_normalization() {
        // "EN_us" matches neither "en_US" nor "en"; matching is exact-string.
        let resolved = sample_map().resolve("EN_us");
        assert_eq!(resolved.matched_key, "default");
    }

    #[test]
    fn test_code_is_always_the_raw_preference() {
        let map = sample_map();
        for preference in ["en", "en_GB", "ja_JP"] {
            assert_eq!(map.resolve(preference).code, preference);
        }
    }

    #[test]
    fn test_short_preference_skips_subtag_tier() {
        let resolved = sample_map().resolve("e");
        assert_eq!(resolved.matched_key, "default");
    }
}
