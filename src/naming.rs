//! Identifier case conversion between camelCase, PascalCase, snake_case and
//! kebab-case.
//!
//! Conversion runs in four stages: classify the source convention, split it
//! into words, lowercase the words, then reassemble them in the target
//! convention. Input that cannot be classified is returned unchanged.

use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::UtilError;
use crate::strings::capitalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum NamingConvention {
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl FromStr for NamingConvention {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "camel" => Ok(Self::Camel),
            "pascal" => Ok(Self::Pascal),
            "snake" => Ok(Self::Snake),
            "kebab" => Ok(Self::Kebab),
            other => Err(UtilError::UnknownConvention(other.to_string())),
        }
    }
}

/// Classifies `input` by precedence: a `-` anywhere means kebab; a `_` (with
/// no leading underscore) means snake; otherwise the case of the first
/// character picks camel or pascal.
pub fn identify_naming_convention(input: &str) -> Option<NamingConvention> {
    if input.contains('-') {
        return Some(NamingConvention::Kebab);
    }
    if input.contains('_') && !input.starts_with('_') {
        return Some(NamingConvention::Snake);
    }
    match input.chars().next() {
        Some(c) if c.is_lowercase() => Some(NamingConvention::Camel),
        Some(c) if c.is_uppercase() => Some(NamingConvention::Pascal),
        _ => None,
    }
}

/// Splits before every ASCII uppercase letter.
///
/// Acronyms are not grouped: `"parseHTTP"` yields `["parse", "H", "T", "T", "P"]`.
pub fn split_camel_pascal(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for c in input.chars() {
        if c.is_ascii_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn tokenize(input: &str, convention: NamingConvention) -> Vec<String> {
    let raw: Vec<String> = match convention {
        NamingConvention::Snake => input.split('_').map(str::to_string).collect(),
        NamingConvention::Kebab => input.split('-').map(str::to_string).collect(),
        NamingConvention::Camel | NamingConvention::Pascal => split_camel_pascal(input),
    };
    raw.into_iter()
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

fn assemble(words: &[String], target: NamingConvention) -> String {
    match target {
        NamingConvention::Snake => words.join("_"),
        NamingConvention::Kebab => words.join("-"),
        NamingConvention::Pascal => words.iter().map(|w| capitalize(w)).join(""),
        NamingConvention::Camel => words
            .iter()
            .enumerate()
            .map(|(i, w)| if i == 0 { w.clone() } else { capitalize(w) })
            .join(""),
    }
}

/// Re-spells `input` in the `target` convention.
///
/// One leading underscore is stripped before classification and, when
/// `preserve_leading_underscore` is set, put back on the result. Input that
/// matches no convention is logged and returned as-is.
pub fn compound_name_from(
    input: &str,
    target: NamingConvention,
    preserve_leading_underscore: bool,
) -> String {
    let (had_underscore, body) = match input.strip_prefix('_') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let Some(source) = identify_naming_convention(body) else {
        tracing::warn!(input, %target, "could not identify naming convention; leaving name unchanged");
        return input.to_string();
    };

    let converted = assemble(&tokenize(body, source), target);
    if had_underscore && preserve_leading_underscore {
        format!("_{converted}")
    } else {
        converted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use NamingConvention::*;

    #[test]
    fn test_identify_naming_convention() {
        assert_eq!(identify_naming_convention("my-variable"), Some(Kebab));
        assert_eq!(identify_naming_convention("my_variable"), Some(Snake));
        assert_eq!(identify_naming_convention("myVariable"), Some(Camel));
        assert_eq!(identify_naming_convention("MyVariable"), Some(Pascal));
        assert_eq!(identify_naming_convention("lowercase"), Some(Camel));
    }

    #[test]
    fn test_identify_precedence() {
        // a dash wins over an underscore
        assert_eq!(identify_naming_convention("my-var_name"), Some(Kebab));
        assert_eq!(identify_naming_convention("MY_CONST"), Some(Snake));
    }

    #[test]
    fn test_identify_unclassifiable() {
        assert_eq!(identify_naming_convention(""), None);
        assert_eq!(identify_naming_convention("_private"), None);
        assert_eq!(identify_naming_convention("42things"), None);
        assert_eq!(identify_naming_convention("$dollar"), None);
    }

    #[test]
    fn test_split_camel_pascal() {
        assert_eq!(split_camel_pascal("myVariableName"), ["my", "Variable", "Name"]);
        assert_eq!(split_camel_pascal("MyVariableName"), ["My", "Variable", "Name"]);
        assert_eq!(split_camel_pascal("parseHTTP"), ["parse", "H", "T", "T", "P"]);
        assert!(split_camel_pascal("").is_empty());
    }

    #[test]
    fn test_compound_name_from_snake_to_camel() {
        assert_eq!(compound_name_from("my_variable_name", Camel, false), "myVariableName");
    }

    #[test]
    fn test_compound_name_from_camel_to_snake() {
        assert_eq!(compound_name_from("myVariableName", Snake, false), "my_variable_name");
    }

    #[test]
    fn test_compound_name_from_all_targets() {
        let input = "user-account-id";
        assert_eq!(compound_name_from(input, Camel, false), "userAccountId");
        assert_eq!(compound_name_from(input, Pascal, false), "UserAccountId");
        assert_eq!(compound_name_from(input, Snake, false), "user_account_id");
        assert_eq!(compound_name_from(input, Kebab, false), "user-account-id");
    }

    #[test]
    fn test_compound_name_from_pascal_source() {
        assert_eq!(compound_name_from("HttpRequest", Kebab, false), "http-request");
        assert_eq!(compound_name_from("HttpRequest", Camel, false), "httpRequest");
    }

    #[test]
    fn test_compound_name_normalizes_case() {
        assert_eq!(compound_name_from("MAX_RETRY_COUNT", Camel, false), "maxRetryCount");
    }

    #[test]
    fn test_compound_name_leading_underscore() {
        assert_eq!(compound_name_from("_my_field", Camel, false), "myField");
        assert_eq!(compound_name_from("_my_field", Camel, true), "_myField");
        assert_eq!(compound_name_from("_myField", Kebab, true), "_my-field");
    }

    #[test]
    fn test_compound_name_collapses_empty_segments() {
        assert_eq!(compound_name_from("my__field_", Kebab, false), "my-field");
    }

    #[test]
    fn test_compound_name_unclassifiable_is_unchanged() {
        assert_eq!(compound_name_from("123abc", Snake, false), "123abc");
        assert_eq!(compound_name_from("", Pascal, true), "");
        assert_eq!(compound_name_from("__x", Camel, true), "__x");
    }

    #[test]
    fn test_round_trip_is_stable() {
        for (input, snake) in [
            ("my_variable_name", "my_variable_name"),
            ("myVariableName", "my_variable_name"),
            ("MyVariableName", "my_variable_name"),
            ("my-variable-name", "my_variable_name"),
        ] {
            let camel = compound_name_from(input, Camel, false);
            assert_eq!(compound_name_from(&camel, Snake, false), snake);
        }
    }

    #[test]
    fn test_convention_display_and_parse() {
        assert_eq!(Kebab.to_string(), "kebab");
        assert_eq!("pascal".parse::<NamingConvention>().unwrap(), Pascal);
        assert!("screaming".parse::<NamingConvention>().is_err());
    }
}
