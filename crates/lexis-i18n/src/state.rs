//! Committed dictionary state snapshots

use crate::dictionary::{Dictionary, Entry};

/// Snapshot of the committed dictionary state
///
/// Replaced wholesale on every successful load; readers hold an immutable
/// snapshot and never observe a partial update. `loaded` stays false until
/// the first successful commit, and a failed fetch never touches the state.
#[derive(Debug, Clone, Default)]
pub struct DictionaryState {
    /// Locale code of the committed dictionary
    pub active_locale: Option<String>,
    /// The committed dictionary
    pub dictionary: Dictionary,
    /// Whether any dictionary has been committed yet
    pub loaded: bool,
    /// Generation of the load that produced this snapshot
    generation: u64,
}

impl DictionaryState {
    /// Pre-load state: nothing committed yet
    pub(crate) fn empty() -> Self {
        Self::default()
    }

    /// State produced by a successful load commit
    pub(crate) fn committed(code: String, dictionary: Dictionary, generation: u64) -> Self {
        Self {
            active_locale: Some(code),
            dictionary,
            loaded: true,
            generation,
        }
    }

    /// Generation of the committing load; zero before the first commit
    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    /// Entry stored under `key` in the committed dictionary
    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.dictionary.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state() {
        let state = DictionaryState::empty();
        assert!(!state.loaded);
        assert!(state.active_locale.is_none());
        assert_eq!(state.generation(), 0);
        assert!(state.entry("any").is_none());
    }

    #[test]
    fn test_committed_state() {
        let mut dictionary = Dictionary::new();
        dictionary.insert("greeting".to_string(), Entry::Template("Hello".to_string()));

        let state = DictionaryState::committed("fr".to_string(), dictionary, 3);
        assert!(state.loaded);
        assert_eq!(state.active_locale.as_deref(), Some("fr"));
        assert_eq!(state.generation(), 3);
        assert!(state.entry("greeting").is_some());
    }
}
