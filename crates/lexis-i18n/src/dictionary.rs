//! Dictionary data model for loaded locale resources
//!
//! A dictionary is a flat JSON document mapping lookup keys to entries. An
//! entry is a plain template string, a list of strings, or a variant entry
//! carrying one template per conditional/plural tag.

use crate::args::Arg;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from lookup key to entry, loaded from a locale resource
pub type Dictionary = HashMap<String, Entry>;

/// A single dictionary entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Entry {
    /// Plain template string
    Template(String),
    /// Raw list of strings, served verbatim by array lookups
    List(Vec<String>),
    /// Conditional/plural templates keyed by variant tag
    Variants(VariantEntry),
}

/// Conditional/plural templates for a single key
///
/// Tags are fixed; `default` is the catch-all. An entry without `default`
/// and without a matching tag is a reportable condition, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VariantEntry {
    /// Template for a numeric-zero selector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero: Option<String>,
    /// Template for a numeric-one selector
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one: Option<String>,
    /// Template for a truthy selector
    #[serde(rename = "true", skip_serializing_if = "Option::is_none")]
    pub when_true: Option<String>,
    /// Template for a falsy (or missing) selector
    #[serde(rename = "false", skip_serializing_if = "Option::is_none")]
    pub when_false: Option<String>,
    /// Catch-all template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

/// Variant selector tags, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantTag {
    Zero,
    One,
    True,
    False,
    Default,
}

impl VariantTag {
    /// Fixed evaluation priority: the first tag present on the entry and
    /// satisfied by the selector wins
    pub const PRIORITY: [Self; 5] = [Self::Zero, Self::One, Self::True, Self::False, Self::Default];

    /// Tag name as it appears in dictionary resources
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::True => "true",
            Self::False => "false",
            Self::Default => "default",
        }
    }

    /// Whether the selector satisfies this tag
    ///
    /// A missing selector never matches `zero` or `one` and counts as falsy,
    /// so it selects a `false` template when one is present.
    pub fn matches(&self, selector: Option<&Arg>) -> bool {
        match self {
            Self::Zero => selector.is_some_and(Arg::is_zero),
            Self::One => selector.is_some_and(Arg::is_one),
            Self::True => selector.is_some_and(Arg::is_truthy),
            Self::False => !selector.is_some_and(Arg::is_truthy),
            Self::Default => true,
        }
    }
}

impl VariantEntry {
    /// Template stored under the given tag, if any
    pub fn template(&self, tag: VariantTag) -> Option<&str> {
        let slot = match tag {
            VariantTag::Zero => &self.zero,
            VariantTag::One => &self.one,
            VariantTag::True => &self.when_true,
            VariantTag::False => &self.when_false,
            VariantTag::Default => &self.default,
        };
        slot.as_deref()
    }

    /// Select the template for a selector value per the fixed tag priority
    ///
    /// Returns `None` when no tag matches and no `default` is present.
    pub fn select(&self, selector: Option<&Arg>) -> Option<(VariantTag, &str)> {
        VariantTag::PRIORITY.into_iter().find_map(|tag| {
            let template = self.template(tag)?;
            tag.matches(selector).then_some((tag, template))
        })
    }

    /// First template present in priority order, used as the best-effort
    /// fallback when selection fails
    pub fn first_present(&self) -> Option<(VariantTag, &str)> {
        VariantTag::PRIORITY
            .into_iter()
            .find_map(|tag| self.template(tag).map(|template| (tag, template)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Scalar;

    fn count_entry() -> VariantEntry {
        VariantEntry {
            zero: Some("none".to_string()),
            one: Some("one item".to_string()),
            default: Some("{} items".to_string()),
            ..VariantEntry::default()
        }
    }

    fn selector(scalar: Scalar) -> Arg {
        Arg::Value(scalar)
    }

    #[test]
    fn test_entry_deserialization_shapes() {
        let json = r#"
        {
            "greeting": "Hello {}",
            "weekdays": ["Mon", "Tue", "Wed"],
            "cart.items": {"zero": "empty", "one": "one item", "default": "{} items"}
        }
        "#;
        let dictionary: Dictionary = serde_json::from_str(json).unwrap();

        assert_eq!(
            dictionary["greeting"],
            Entry::Template("Hello {}".to_string())
        );
        assert_eq!(
            dictionary["weekdays"],
            Entry::List(vec!["Mon".into(), "Tue".into(), "Wed".into()])
        );
        match &dictionary["cart.items"] {
            Entry::Variants(entry) => {
                assert_eq!(entry.zero.as_deref(), Some("empty"));
                assert_eq!(entry.default.as_deref(), Some("{} items"));
            }
            other => panic!("expected variants, got {:?}", other),
        }
    }

    #[test]
    fn test_true_false_tags_deserialize() {
        let json = r#"{"online": {"true": "connected", "false": "offline"}}"#;
        let dictionary: Dictionary = serde_json::from_str(json).unwrap();

        match &dictionary["online"] {
            Entry::Variants(entry) => {
                assert_eq!(entry.when_true.as_deref(), Some("connected"));
                assert_eq!(entry.when_false.as_deref(), Some("offline"));
            }
            other => panic!("expected variants, got {:?}", other),
        }
    }

    #[test]
    fn test_select_priority_order() {
        let entry = count_entry();

        let (tag, template) = entry.select(Some(&selector(Scalar::Int(0)))).unwrap();
        assert_eq!(tag, VariantTag::Zero);
        assert_eq!(template, "none");

        let (tag, template) = entry.select(Some(&selector(Scalar::Int(1)))).unwrap();
        assert_eq!(tag, VariantTag::One);
        assert_eq!(template, "one item");

        let (tag, template) = entry.select(Some(&selector(Scalar::Int(5)))).unwrap();
        assert_eq!(tag, VariantTag::Default);
        assert_eq!(template, "{} items");
    }

    #[test]
    fn test_select_boolean_tags() {
        let entry = VariantEntry {
            when_true: Some("connected".to_string()),
            when_false: Some("offline".to_string()),
            ..VariantEntry::default()
        };

        let (tag, _) = entry.select(Some(&selector(Scalar::Bool(true)))).unwrap();
        assert_eq!(tag, VariantTag::True);

        let (tag, _) = entry.select(Some(&selector(Scalar::Bool(false)))).unwrap();
        assert_eq!(tag, VariantTag::False);
    }

    #[test]
    fn test_missing_selector_is_falsy() {
        let entry = VariantEntry {
            when_false: Some("offline".to_string()),
            default: Some("unknown".to_string()),
            ..VariantEntry::default()
        };

        let (tag, template) = entry.select(None).unwrap();
        assert_eq!(tag, VariantTag::False);
        assert_eq!(template, "offline");
    }

    #[test]
    fn test_missing_selector_never_matches_zero() {
        let entry = count_entry();
        let (tag, _) = entry.select(None).unwrap();
        assert_eq!(tag, VariantTag::Default);
    }

    #[test]
    fn test_select_without_default_or_match() {
        let entry = VariantEntry {
            one: Some("one item".to_string()),
            ..VariantEntry::default()
        };

        assert!(entry.select(Some(&selector(Scalar::Int(7)))).is_none());
        assert_eq!(
            entry.first_present(),
            Some((VariantTag::One, "one item"))
        );
    }
}
