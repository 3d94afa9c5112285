//! The per-convention string converters and their single-level mapping wrappers.
//! All functions here are total and non-recursive; [`crate::parse_keys`] layers
//! the recursion on top.

use regex::Regex;
use serde_json::{Map, Value};

/// Convert a camelCase or PascalCase string to snake_case.
///
/// An underscore is inserted before an interior uppercase letter that starts a
/// new word, detected at two boundaries: the letter is followed by a lowercase
/// letter (`ABCdef` -> `ab_cdef`), or it is preceded by a lowercase letter or
/// digit (`fooBar` -> `foo_bar`). The result is ASCII-lowercased, so strings
/// already in snake_case come back unchanged.
pub fn to_snake_case(value: &str) -> String {
    let chars = value.chars().collect::<Vec<_>>();
    let mut result = String::with_capacity(value.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            let prev = chars[i - 1];
            if next_is_lower || prev.is_ascii_lowercase() || prev.is_ascii_digit() {
                result.push('_');
            }
        }
        result.push(ch.to_ascii_lowercase());
    }

    result
}

/// Convert all keys of the given mapping to snake_case. Single level, values
/// pass through untouched.
pub fn keys_to_snake_case(content: &Map<String, Value>) -> Map<String, Value> {
    content
        .iter()
        .map(|(key, value)| (to_snake_case(key), value.clone()))
        .collect()
}

/// Convert a snake_case string to camelCase.
///
/// The string is split on `_`. The first segment is kept exactly as-is,
/// including its original case. Every following segment is title-cased and
/// appended with no separator; blank segments are dropped.
pub fn to_camel_case(value: &str) -> String {
    let mut segments = value.split('_');
    let mut result = String::with_capacity(value.len());

    if let Some(first) = segments.next() {
        result.push_str(first);
    }
    for segment in segments {
        if !is_blank(segment) {
            result.push_str(&title_case(segment));
        }
    }

    result
}

/// Convert all keys of the given mapping to camelCase. Single level, values
/// pass through untouched.
pub fn keys_to_camel_case(content: &Map<String, Value>) -> Map<String, Value> {
    content
        .iter()
        .map(|(key, value)| (to_camel_case(key), value.clone()))
        .collect()
}

/// Convert a snake_case string to PascalCase.
///
/// The string is split on `_`. A single segment is returned unchanged if
/// `ignore_pattern` matches it, and title-cased otherwise. Multiple segments
/// are each title-cased and joined with no separator, dropping blank segments;
/// the ignore pattern is only consulted in the single-segment case.
pub fn to_pascal_case(value: &str, ignore_pattern: Option<&Regex>) -> String {
    let segments = value.split('_').collect::<Vec<_>>();

    if let [word] = segments[..] {
        if ignore_pattern.is_some_and(|pattern| pattern.is_match(word)) {
            return word.to_owned();
        }
        return title_case(word);
    }

    segments
        .iter()
        .filter(|segment| !is_blank(segment))
        .map(|segment| title_case(segment))
        .collect()
}

/// Convert all keys of the given mapping to PascalCase. Single level, values
/// pass through untouched. Single-word keys matching `ignore_pattern` are kept
/// as-is.
pub fn keys_to_pascal_case(
    content: &Map<String, Value>,
    ignore_pattern: Option<&Regex>,
) -> Map<String, Value> {
    content
        .iter()
        .map(|(key, value)| (to_pascal_case(key, ignore_pattern), value.clone()))
        .collect()
}

/// Uppercase the first character and lowercase the rest.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result = String::with_capacity(word.len());
            result.extend(first.to_uppercase());
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}

/// Empty or pure-whitespace segments contribute nothing when joined.
fn is_blank(segment: &str) -> bool {
    segment.chars().all(char::is_whitespace)
}
