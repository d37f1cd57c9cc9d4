use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::strings::capitalize;

const FALLBACK_FIRST_NAME: &str = "John";
const FALLBACK_LAST_NAME: &str = "Doe";

/// A person's name split into its two stored halves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Name {
    pub first_name: String,
    pub last_name: String,
}

/// Either a pre-joined full name or a [`Name`].
#[derive(Debug, Clone, Copy)]
pub enum NameRef<'a> {
    Full(&'a str),
    Parts(&'a Name),
}

impl<'a> From<&'a str> for NameRef<'a> {
    fn from(s: &'a str) -> Self {
        NameRef::Full(s)
    }
}

impl<'a> From<&'a Name> for NameRef<'a> {
    fn from(name: &'a Name) -> Self {
        NameRef::Parts(name)
    }
}

fn maybe_capitalize(part: &str, format: bool) -> String {
    if format {
        capitalize(part)
    } else {
        part.to_string()
    }
}

/// Splits on whitespace: the first token is the first name, everything after
/// it (single-space joined) is the last name.
pub fn split_full_name(full_name: &str, format: bool) -> Name {
    let mut tokens = full_name.split_whitespace();
    let first_name = tokens.next().unwrap_or_default();
    let last_name = tokens.join(" ");

    Name {
        first_name: maybe_capitalize(first_name, format),
        last_name: maybe_capitalize(&last_name, format),
    }
}

pub fn merge_full_name(first_name: &str, last_name: &str, format: bool) -> String {
    format!(
        "{} {}",
        maybe_capitalize(first_name, format),
        maybe_capitalize(last_name, format)
    )
}

/// `"<prefix>. <full name>"`. Empty parts of a [`Name`] become "John"/"Doe".
pub fn format_name_with_prefix<'a>(name: impl Into<NameRef<'a>>, prefix: &str) -> String {
    let full_name = match name.into() {
        NameRef::Full(s) => s.to_string(),
        NameRef::Parts(n) => {
            let first = if n.first_name.is_empty() {
                FALLBACK_FIRST_NAME
            } else {
                &n.first_name
            };
            let last = if n.last_name.is_empty() {
                FALLBACK_LAST_NAME
            } else {
                &n.last_name
            };
            merge_full_name(first, last, true)
        }
    };
    format!("{prefix}. {full_name}")
}
