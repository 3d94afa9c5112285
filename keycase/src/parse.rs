//! The recursive key mapper: a depth-first walk that renames mapping keys at
//! every nesting level while leaving leaf values untouched.

use regex::Regex;
use serde_json::{Map, Value};

use crate::{
    Convention, Error,
    case::{keys_to_camel_case, keys_to_pascal_case, keys_to_snake_case},
};

/// Convert all keys of the given JSON value to the given convention, recursively.
///
/// Objects have their keys renamed at every depth; arrays are rebuilt
/// element-wise, recursing into object and array elements and cloning scalars
/// through. Scalars, empty arrays and empty objects are returned unchanged at
/// every depth. The input is never mutated; a fresh value is always built.
///
/// If a renamed key collides with another key on the same level, the later one
/// silently overwrites the earlier. Callers that need collision detection must
/// pre-check their keys.
///
/// `ignore_pattern` is only consulted for [`Convention::Pascal`]; the other
/// conventions ignore it.
///
/// # Errors
/// Returns [`Error::InvalidInputType`] if the top-level value is neither an
/// object nor an array.
pub fn parse_keys(
    data: &Value,
    convention: Convention,
    ignore_pattern: Option<&Regex>,
) -> Result<Value, Error> {
    match data {
        Value::Object(content) => Ok(Value::Object(parse_map(content, convention, ignore_pattern))),
        Value::Array(items) => Ok(Value::Array(parse_seq(items, convention, ignore_pattern))),
        _ => Err(Error::InvalidInputType),
    }
}

/// Rename one mapping level, then recurse into the values.
fn parse_map(
    content: &Map<String, Value>,
    convention: Convention,
    ignore_pattern: Option<&Regex>,
) -> Map<String, Value> {
    let renamed = match convention {
        Convention::Snake => keys_to_snake_case(content),
        Convention::Camel => keys_to_camel_case(content),
        Convention::Pascal => keys_to_pascal_case(content, ignore_pattern),
    };

    renamed
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Object(inner) => {
                    Value::Object(parse_map(&inner, convention, ignore_pattern))
                }
                Value::Array(items) => Value::Array(parse_seq(&items, convention, ignore_pattern)),
                scalar => scalar,
            };
            (key, value)
        })
        .collect()
}

/// Rebuild a sequence, recursing into container elements and cloning scalars.
fn parse_seq(items: &[Value], convention: Convention, ignore_pattern: Option<&Regex>) -> Vec<Value> {
    items
        .iter()
        .map(|item| match item {
            Value::Object(inner) => Value::Object(parse_map(inner, convention, ignore_pattern)),
            Value::Array(inner) => Value::Array(parse_seq(inner, convention, ignore_pattern)),
            scalar => scalar.clone(),
        })
        .collect()
}
