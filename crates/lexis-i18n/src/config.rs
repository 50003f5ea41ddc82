//! Engine configuration loading
//!
//! Hosts can configure the engine programmatically through the builder, or
//! from a TOML document:
//!
//! ```toml
//! platform_locale = "en_US"
//! trust_markup = true
//! preference_file = "state/preferences.json"
//!
//! [locales]
//! default = "https://cdn.example.com/i18n/resources-locale_en.json"
//! en = "https://cdn.example.com/i18n/resources-locale_en.json"
//! fr = "https://cdn.example.com/i18n/resources-locale_fr.json"
//! ```

use crate::locale::{LocaleMap, DEFAULT_LOCALE_KEY};
use lexis_common::{validate_non_empty, LexisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

fn default_platform_locale() -> String {
    "en".to_string()
}

fn default_trust_markup() -> bool {
    true
}

/// Engine configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EngineConfig {
    /// Locale code to resource URL table; must contain `"default"`
    pub locales: HashMap<String, String>,
    /// Locale reported by the hosting platform, used when nothing is stored
    #[serde(default = "default_platform_locale")]
    pub platform_locale: String,
    /// Whether resolved templates are trusted for markup rendering
    #[serde(default = "default_trust_markup")]
    pub trust_markup: bool,
    /// Optional path for a JSON-file preference store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference_file: Option<PathBuf>,
}

impl EngineConfig {
    /// Parse and validate a configuration from a TOML document
    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a TOML file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading engine configuration");

        let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
            LexisError::config_with_source(
                format!("failed to read configuration file {}", path.display()),
                err,
            )
        })?;
        Self::from_toml(&raw)
    }

    /// Validate the configuration; missing `"default"` is fatal at setup
    pub fn validate(&self) -> Result<()> {
        if !self.locales.contains_key(DEFAULT_LOCALE_KEY) {
            return Err(LexisError::config(format!(
                "locales table must contain a '{}' entry",
                DEFAULT_LOCALE_KEY
            )));
        }
        for (code, url) in &self.locales {
            validate_non_empty(code, "locale code")?;
            validate_non_empty(url, &format!("resource URL for '{}'", code))?;
        }
        validate_non_empty(&self.platform_locale, "platform_locale")?;
        Ok(())
    }

    /// Build the immutable locale map from this configuration
    pub fn locale_map(&self) -> Result<LocaleMap> {
        LocaleMap::new(self.locales.clone())
    }
}
