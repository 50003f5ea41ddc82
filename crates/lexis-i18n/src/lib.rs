//! Locale resolution, dictionary loading, and localized string rendering
//!
//! This crate backs a templating/filter call site and a language-switch
//! control in interactive clients. It resolves a raw locale preference
//! against a configured locale map, loads the matching dictionary resource
//! asynchronously, and renders parameterized, pluralization-aware strings
//! from lookup keys. Lookups never fail: unknown keys render as themselves
//! so partially translated dictionaries roll out without breaking the UI.
//!
//! # Example
//!
//! ```no_run
//! use lexis_i18n::{call_args, I18nEngine, LocaleMap};
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> lexis_common::Result<()> {
//!     let mut locales = HashMap::new();
//!     locales.insert("default".into(), "https://cdn.example.com/i18n/en.json".into());
//!     locales.insert("fr".into(), "https://cdn.example.com/i18n/fr.json".into());
//!
//!     let engine = I18nEngine::builder()
//!         .locales(LocaleMap::new(locales)?)
//!         .platform_locale("en_US")
//!         .initialize()
//!         .await?;
//!
//!     engine.select_language("fr").await?;
//!     println!("{}", engine.get_string(&call_args!["cart.items", 3, 3]));
//!     Ok(())
//! }
//! ```

pub mod args;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod fetcher;
pub mod locale;
pub mod rendered;
pub mod state;
pub mod store;
pub mod substitution;

pub use args::{Arg, CallArgs, Scalar};
pub use config::EngineConfig;
pub use dictionary::{Dictionary, Entry, VariantEntry, VariantTag};
pub use engine::{I18nEngine, I18nEngineBuilder, LocaleLoaded};
pub use fetcher::{HttpResourceFetcher, ResourceFetcher};
pub use locale::{LocaleMap, ResolvedLocale, DEFAULT_LOCALE_KEY};
pub use rendered::LocalizedString;
pub use state::DictionaryState;
pub use store::{
    JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore, LOCALE_PREFERENCE_KEY,
};
pub use substitution::substitute;

// Re-export the shared error types for downstream convenience
pub use lexis_common::{LexisError, Result};
