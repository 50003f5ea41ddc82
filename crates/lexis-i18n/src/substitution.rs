//! Placeholder substitution for resolved templates
//!
//! Templates carry three placeholder forms: `{}` (anonymous), `{N}`
//! (1-based positional), and `{name}` (named). With a single substitution
//! value the template is in anonymous mode; with more than one, scalars
//! bind positionally and `{}` is left alone. Named maps bind by placeholder
//! name in either mode. In conditional mode the caller strips the consumed
//! selector first, which is exactly the positional renumbering the original
//! call convention expects.

use crate::args::Arg;

/// Substitute call values into a template
///
/// `values` are the substitution arguments only — for a variant entry the
/// selector must already be stripped. Replacements are global per argument,
/// applied one argument at a time in call order. Placeholders with no
/// matching argument are left verbatim; extra arguments with no matching
/// placeholder are ignored.
pub fn substitute(template: &str, values: &[Arg]) -> String {
    let mut output = template.to_string();
    // Positional numbering counts every argument, named maps included.
    let multi_parameter = values.len() > 1;

    for (position, arg) in values.iter().enumerate() {
        match arg {
            Arg::Named(map) => {
                for (name, value) in map {
                    output = output.replace(&format!("{{{}}}", name), &value.to_string());
                }
            }
            Arg::Value(scalar) => {
                if multi_parameter {
                    output = output.replace(&format!("{{{}}}", position + 1), &scalar.to_string());
                } else {
                    output = output.replace("{}", &scalar.to_string());
                }
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{call_args, named_args};

    #[test]
    fn test_anonymous_single_argument() {
        let args = call_args!["k", "World"];
        assert_eq!(substitute("Hello {}", args.values()), "Hello World");
    }

    #[test]
    fn test_anonymous_replaces_every_occurrence() {
        let args = call_args!["k", "x"];
        assert_eq!(substitute("{} and {}", args.values()), "x and x");
    }

    #[test]
    fn test_multi_parameter_positions() {
        let args = call_args!["k", 3, 10];
        assert_eq!(substitute("{1} of {2}", args.values()), "3 of 10");
    }

    #[test]
    fn test_multi_parameter_ignores_anonymous_placeholders() {
        let args = call_args!["k", 3, 10];
        assert_eq!(substitute("{} of {2}", args.values()), "{} of 10");
    }

    #[test]
    fn test_named_arguments() {
        let args = call_args!["k", named_args! { "name" => "Ana" }];
        assert_eq!(substitute("Hi {name}", args.values()), "Hi Ana");
    }

    #[test]
    fn test_named_arguments_replace_globally() {
        let args = call_args!["k", named_args! { "name" => "Ana" }];
        assert_eq!(
            substitute("{name}, yes you, {name}", args.values()),
            "Ana, yes you, Ana"
        );
    }

    #[test]
    fn test_named_maps_occupy_positional_slots() {
        // The map sits at position 1, so the scalar binds to {2}.
        let args = call_args!["k", named_args! { "name" => "Ana" }, 4];
        assert_eq!(
            substitute("{name} has {2} messages", args.values()),
            "Ana has 4 messages"
        );
    }

    #[test]
    fn test_unmatched_placeholders_are_left_verbatim() {
        let args = call_args!["k", 1, 2];
        assert_eq!(substitute("{1} {3} {missing}", args.values()), "1 {3} {missing}");
    }

    #[test]
    fn test_no_values_leaves_template_untouched() {
        let args = call_args!["k"];
        assert_eq!(substitute("Hello {}", args.values()), "Hello {}");
    }

    #[test]
    fn test_boolean_and_float_rendering() {
        let args = call_args!["k", true];
        assert_eq!(substitute("flag: {}", args.values()), "flag: true");

        let args = call_args!["k", 2.5];
        assert_eq!(substitute("ratio: {}", args.values()), "ratio: 2.5");
    }
}
