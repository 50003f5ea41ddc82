//! Rendered localized strings with an explicit markup-trust marker
//!
//! The engine is the trust boundary for markup rendering: a host must not
//! re-escape a string the engine has marked safe, and must escape anything
//! it hasn't. The marker travels with the string instead of living in a
//! framework primitive.

use std::fmt;

/// A resolved, substituted localized string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedString {
    text: String,
    markup_safe: bool,
}

impl LocalizedString {
    /// A string approved for markup rendering
    pub(crate) fn trusted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup_safe: true,
        }
    }

    /// A string the host must escape before markup rendering
    pub(crate) fn untrusted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            markup_safe: false,
        }
    }

    /// The rendered text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consume into the rendered text
    pub fn into_string(self) -> String {
        self.text
    }

    /// Whether the engine approved this string for markup rendering
    pub fn is_markup_safe(&self) -> bool {
        self.markup_safe
    }
}

impl fmt::Display for LocalizedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for LocalizedString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<&str> for LocalizedString {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<str> for LocalizedString {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trust_marker() {
        assert!(LocalizedString::trusted("hi").is_markup_safe());
        assert!(!LocalizedString::untrusted("hi").is_markup_safe());
    }

    #[test]
    fn test_display_and_comparison() {
        let rendered = LocalizedString::trusted("Hello World");
        assert_eq!(rendered.to_string(), "Hello World");
        assert_eq!(rendered, "Hello World");
        assert_eq!(rendered.as_str(), "Hello World");
    }
}
