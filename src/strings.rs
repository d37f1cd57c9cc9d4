/// Uppercases the first character of `word`, leaving the rest untouched.
///
/// ```
/// assert_eq!(pmd_util::strings::capitalize("hello"), "Hello");
/// ```
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Naive plural: appends an `s`.
pub fn pluralize(word: &str) -> String {
    format!("{word}s")
}
