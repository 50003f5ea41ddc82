//! Engine orchestration: locale selection, load sequencing, and lookups
//!
//! The engine owns the committed dictionary state. `select_language` is the
//! only writer; lookups read a lock-free snapshot and never block or fail.
//! Overlapping language switches are tagged with generation tokens so a
//! slow, superseded fetch can never clobber a newer selection.

use crate::args::CallArgs;
use crate::config::EngineConfig;
use crate::dictionary::Entry;
use crate::fetcher::{HttpResourceFetcher, ResourceFetcher};
use crate::locale::LocaleMap;
use crate::rendered::LocalizedString;
use crate::state::DictionaryState;
use crate::store::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore, LOCALE_PREFERENCE_KEY};
use crate::substitution::substitute;
use arc_swap::ArcSwap;
use lexis_common::{LexisError, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// Event emitted after a dictionary commit
#[derive(Debug, Clone)]
pub struct LocaleLoaded {
    /// Locale code that became active
    pub code: String,
}

/// Locale resolution, dictionary loading, and localized string rendering
pub struct I18nEngine {
    locales: Option<LocaleMap>,
    fetcher: Arc<dyn ResourceFetcher>,
    store: Arc<dyn PreferenceStore>,
    state: ArcSwap<DictionaryState>,
    commit_lock: Mutex<()>,
    issued: AtomicU64,
    events: broadcast::Sender<LocaleLoaded>,
    trust_markup: bool,
}

impl std::fmt::Debug for I18nEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.load();
        f.debug_struct("I18nEngine")
            .field("locales", &self.locales)
            .field("state", &**state)
            .field("trust_markup", &self.trust_markup)
            .finish_non_exhaustive()
    }
}

impl I18nEngine {
    /// Start building an engine
    pub fn builder() -> I18nEngineBuilder {
        I18nEngineBuilder::new()
    }

    /// Switch the active language
    ///
    /// Resolves the preference against the locale map, persists the raw
    /// preference immediately (independent of the fetch outcome), fetches
    /// the matching dictionary, and commits it unless a newer selection has
    /// already committed. A fetch failure leaves the previous dictionary
    /// active and is reported through the returned error.
    pub async fn select_language(&self, preference: &str) -> Result<()> {
        let locales = self.locales.as_ref().ok_or_else(|| {
            LexisError::config("cannot select a language before locales are configured")
        })?;

        let resolved = locales.resolve(preference);
        info!(language = %resolved.code, url = %resolved.url, "selecting language");

        // The engine persists what the user asked for, not the matched key.
        if let Err(err) = self.store.put(LOCALE_PREFERENCE_KEY, &resolved.code).await {
            warn!(error = %err, "failed to persist locale preference");
        }

        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        let dictionary = match self.fetcher.fetch(&resolved.url).await {
            Ok(dictionary) => dictionary,
            Err(err) => {
                warn!(url = %resolved.url, error = %err, "cannot load locale resource");
                return Err(err);
            }
        };

        let committed = {
            let _guard = self.commit_lock.lock();
            let current = self.state.load();
            if generation > current.generation() {
                self.state.store(Arc::new(DictionaryState::committed(
                    resolved.code.clone(),
                    dictionary,
                    generation,
                )));
                true
            } else {
                false
            }
        };

        if committed {
            debug!(language = %resolved.code, "locale successfully loaded");
            let _ = self.events.send(LocaleLoaded {
                code: resolved.code,
            });
        } else {
            debug!(language = %resolved.code, generation, "discarding superseded locale load");
        }
        Ok(())
    }

    /// Resolve a localized string for the given call arguments
    ///
    /// Never fails: unknown keys and unloaded state fall through to the key
    /// itself, so partially translated dictionaries render without breaking
    /// the host UI.
    pub fn get_string(&self, args: &CallArgs) -> LocalizedString {
        let state = self.state.load();
        if !state.loaded {
            return LocalizedString::untrusted(args.key());
        }

        let Some(entry) = state.entry(args.key()) else {
            return LocalizedString::untrusted(args.key());
        };

        match entry {
            Entry::Template(template) => self.render(substitute(template, args.values())),
            Entry::List(_) => {
                warn!(key = args.key(), "list entry requested as a string");
                LocalizedString::untrusted(args.key())
            }
            Entry::Variants(variants) => {
                let template = match variants.select(args.selector()) {
                    Some((_, template)) => template,
                    None => {
                        warn!(
                            key = args.key(),
                            "variant entry has no matching tag and no 'default' template"
                        );
                        match variants.first_present() {
                            Some((_, template)) => template,
                            None => return LocalizedString::untrusted(args.key()),
                        }
                    }
                };
                self.render(substitute(template, args.values_after_selector()))
            }
        }
    }

    /// Resolve a localized string for a bare key
    pub fn get(&self, key: &str) -> LocalizedString {
        self.get_string(&CallArgs::new(key))
    }

    /// Raw list stored at `key`, or `[key]` when not loaded or not found
    pub fn get_array(&self, key: &str) -> Vec<String> {
        let state = self.state.load();
        if !state.loaded {
            return vec![key.to_string()];
        }

        match state.entry(key) {
            Some(Entry::List(items)) => items.clone(),
            Some(Entry::Template(template)) => vec![template.clone()],
            Some(Entry::Variants(_)) => {
                warn!(key, "variant entry requested as an array");
                vec![key.to_string()]
            }
            None => vec![key.to_string()],
        }
    }

    /// Whether no locale map was ever configured
    pub fn is_locale_empty(&self) -> bool {
        self.locales.is_none()
    }

    /// Locale code of the committed dictionary, if any
    pub fn active_locale(&self) -> Option<String> {
        self.state.load().active_locale.clone()
    }

    /// Whether a dictionary has been committed yet
    pub fn is_loaded(&self) -> bool {
        self.state.load().loaded
    }

    /// Snapshot of the committed dictionary state
    pub fn snapshot(&self) -> Arc<DictionaryState> {
        self.state.load_full()
    }

    /// Subscribe to locale-loaded notifications
    pub fn subscribe(&self) -> broadcast::Receiver<LocaleLoaded> {
        self.events.subscribe()
    }

    fn render(&self, text: String) -> LocalizedString {
        if self.trust_markup {
            LocalizedString::trusted(text)
        } else {
            LocalizedString::untrusted(text)
        }
    }
}

/// Builder for [`I18nEngine`]
pub struct I18nEngineBuilder {
    locales: Option<LocaleMap>,
    fetcher: Option<Arc<dyn ResourceFetcher>>,
    store: Option<Arc<dyn PreferenceStore>>,
    preset_language: Option<String>,
    platform_locale: String,
    trust_markup: bool,
}

impl Default for I18nEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl I18nEngineBuilder {
    /// Create a builder with defaults: HTTP fetcher, in-memory store,
    /// platform locale `"en"`, markup trusted
    pub fn new() -> Self {
        Self {
            locales: None,
            fetcher: None,
            store: None,
            preset_language: None,
            platform_locale: "en".to_string(),
            trust_markup: true,
        }
    }

    /// Seed the builder from a parsed configuration
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let mut builder = Self::new()
            .locales(config.locale_map()?)
            .platform_locale(&config.platform_locale)
            .trust_markup(config.trust_markup);
        if let Some(path) = &config.preference_file {
            builder = builder.store(Arc::new(JsonFilePreferenceStore::new(path)));
        }
        Ok(builder)
    }

    /// Configure the locale map
    #[must_use]
    pub fn locales(mut self, locales: LocaleMap) -> Self {
        self.locales = Some(locales);
        self
    }

    /// Override the resource fetcher
    #[must_use]
    pub fn fetcher(mut self, fetcher: Arc<dyn ResourceFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Override the preference store
    #[must_use]
    pub fn store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Force an initial language, bypassing the stored preference
    #[must_use]
    pub fn preset_language(mut self, language: impl Into<String>) -> Self {
        self.preset_language = Some(language.into());
        self
    }

    /// Locale reported by the hosting platform, used when nothing is stored
    #[must_use]
    pub fn platform_locale(mut self, locale: impl Into<String>) -> Self {
        self.platform_locale = locale.into();
        self
    }

    /// Whether resolved templates are trusted for markup rendering
    #[must_use]
    pub fn trust_markup(mut self, trust: bool) -> Self {
        self.trust_markup = trust;
        self
    }

    /// Build the engine and kick off the initial dictionary load
    ///
    /// The initial preference is the preset language, else the stored
    /// preference, else the platform locale. With no locale map configured
    /// the load is skipped and the engine stays unloaded. A failed initial
    /// load is logged and non-fatal; lookups fall back to their keys until
    /// a later `select_language` succeeds.
    pub async fn initialize(self) -> Result<I18nEngine> {
        let (events, _) = broadcast::channel(16);
        let engine = I18nEngine {
            locales: self.locales,
            fetcher: self
                .fetcher
                .unwrap_or_else(|| Arc::new(HttpResourceFetcher::new())),
            store: self
                .store
                .unwrap_or_else(|| Arc::new(MemoryPreferenceStore::new())),
            state: ArcSwap::from_pointee(DictionaryState::empty()),
            commit_lock: Mutex::new(()),
            issued: AtomicU64::new(0),
            events,
            trust_markup: self.trust_markup,
        };

        if engine.locales.is_none() {
            debug!("no locales configured, skipping initial load");
            return Ok(engine);
        }

        let stored = match engine.store.get(LOCALE_PREFERENCE_KEY).await {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "failed to read stored locale preference");
                None
            }
        };
        let initial = self
            .preset_language
            .or(stored)
            .unwrap_or(self.platform_locale);

        if let Err(err) = engine.select_language(&initial).await {
            warn!(language = %initial, error = %err, "initial locale load failed");
        }
        Ok(engine)
    }
}
