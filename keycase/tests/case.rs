use keycase::{
    keys_to_camel_case, keys_to_pascal_case, keys_to_snake_case, to_camel_case, to_pascal_case,
    to_snake_case,
};
use regex::Regex;
use serde_json::json;

#[test]
fn test_to_snake_case() {
    assert_eq!(to_snake_case("fooBar"), "foo_bar");
    assert_eq!(to_snake_case("fooBarBaz"), "foo_bar_baz");
    assert_eq!(to_snake_case("FooBar"), "foo_bar");
    assert_eq!(to_snake_case("foo2Bar"), "foo2_bar");

    // Acronym-to-word boundary.
    assert_eq!(to_snake_case("HTTPServer"), "http_server");
    assert_eq!(to_snake_case("parseJSON"), "parse_json");
}

#[test]
fn test_to_snake_case_is_idempotent() {
    assert_eq!(to_snake_case("already_snake"), "already_snake");
    assert_eq!(to_snake_case("foo_bar_baz"), "foo_bar_baz");
    assert_eq!(to_snake_case("word"), "word");
    assert_eq!(to_snake_case(""), "");
}

#[test]
fn test_to_camel_case() {
    assert_eq!(to_camel_case("foo_bar"), "fooBar");
    assert_eq!(to_camel_case("foo_bar_baz"), "fooBarBaz");
    assert_eq!(to_camel_case("foo_BAR"), "fooBar");
}

#[test]
fn test_to_camel_case_keeps_first_segment_as_is() {
    // A single segment is returned exactly as given, not title-cased.
    assert_eq!(to_camel_case("already"), "already");
    assert_eq!(to_camel_case("Already"), "Already");
    assert_eq!(to_camel_case("FOO_bar"), "FOOBar");
}

#[test]
fn test_to_pascal_case() {
    assert_eq!(to_pascal_case("foo_bar", None), "FooBar");
    assert_eq!(to_pascal_case("foo_bar_baz", None), "FooBarBaz");
    assert_eq!(to_pascal_case("id", None), "Id");
    assert_eq!(to_pascal_case("fooBAR", None), "Foobar");
}

#[test]
fn test_to_pascal_case_ignore_pattern() {
    let pattern = Regex::new("^id$").unwrap();

    assert_eq!(to_pascal_case("id", Some(&pattern)), "id");
    assert_eq!(to_pascal_case("name", Some(&pattern)), "Name");

    // The ignore pattern is only consulted for single-word keys.
    assert_eq!(to_pascal_case("id_tag", Some(&Regex::new("id").unwrap())), "IdTag");
}

#[test]
fn test_keys_to_snake_case() {
    let content = json!({ "fooBar": 1, "BazQux": [2, 3] });
    let converted = keys_to_snake_case(content.as_object().unwrap());

    assert_eq!(serde_json::Value::Object(converted), json!({ "foo_bar": 1, "baz_qux": [2, 3] }));
}

#[test]
fn test_keys_to_camel_case() {
    let content = json!({ "foo_bar": 1, "baz_qux": null });
    let converted = keys_to_camel_case(content.as_object().unwrap());

    assert_eq!(serde_json::Value::Object(converted), json!({ "fooBar": 1, "bazQux": null }));
}

#[test]
fn test_keys_to_pascal_case() {
    let content = json!({ "foo_bar": 1, "id": 2 });
    let pattern = Regex::new("^id$").unwrap();
    let converted = keys_to_pascal_case(content.as_object().unwrap(), Some(&pattern));

    assert_eq!(serde_json::Value::Object(converted), json!({ "FooBar": 1, "id": 2 }));
}

#[test]
fn test_keys_conversion_is_single_level() {
    // Nested mapping keys are untouched; only parse_keys recurses.
    let content = json!({ "outer_key": { "inner_key": 1 } });
    let converted = keys_to_camel_case(content.as_object().unwrap());

    assert_eq!(
        serde_json::Value::Object(converted),
        json!({ "outerKey": { "inner_key": 1 } })
    );
}
