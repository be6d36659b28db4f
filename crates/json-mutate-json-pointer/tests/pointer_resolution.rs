use json_mutate_json_pointer::{get_value_by_pointer, parse_json_pointer, to_path};
use serde_json::json;

fn form_doc() -> serde_json::Value {
    json!({
        "code": "Q1",
        "name": "Form",
        "items": [
            {"q": "A", "units": "kg", "x": 1},
            {"q": "B"},
            {"q": "C", "nested": {"a/b": 1, "t~e": 2}}
        ]
    })
}

#[test]
fn resolves_nested_array_paths() {
    let doc = form_doc();
    assert_eq!(get_value_by_pointer(&doc, "/items/0/q"), Some(&json!("A")));
    assert_eq!(get_value_by_pointer(&doc, "/items/1/q"), Some(&json!("B")));
    assert_eq!(get_value_by_pointer(&doc, "/items/2/nested"), Some(&json!({"a/b": 1, "t~e": 2})));
}

#[test]
fn resolves_escaped_components() {
    let doc = form_doc();
    assert_eq!(get_value_by_pointer(&doc, "/items/2/nested/a~1b"), Some(&json!(1)));
    assert_eq!(get_value_by_pointer(&doc, "/items/2/nested/t~0e"), Some(&json!(2)));
}

#[test]
fn unresolvable_paths_yield_none() {
    let doc = form_doc();
    assert_eq!(get_value_by_pointer(&doc, "/missing"), None);
    assert_eq!(get_value_by_pointer(&doc, "/items/9"), None);
    assert_eq!(get_value_by_pointer(&doc, "/items/0/units/deep"), None);
    assert_eq!(get_value_by_pointer(&doc, "/items/-"), None);
}

#[test]
fn root_pointer_resolves_to_document() {
    let doc = form_doc();
    assert_eq!(get_value_by_pointer(&doc, ""), Some(&doc));
}

#[test]
fn malformed_pointer_yields_none() {
    let doc = form_doc();
    assert_eq!(get_value_by_pointer(&doc, "items/0"), None);
}

#[test]
fn numeric_object_keys_are_plain_strings() {
    // Object keys that look like indices resolve as keys, not indices.
    let doc = json!({"0": "zero", "01": "zero-one"});
    assert_eq!(get_value_by_pointer(&doc, "/0"), Some(&json!("zero")));
    assert_eq!(get_value_by_pointer(&doc, "/01"), Some(&json!("zero-one")));
}

#[test]
fn empty_string_key_resolves() {
    let doc = json!({"": {"": "inner"}});
    assert_eq!(get_value_by_pointer(&doc, "/"), Some(&json!({"": "inner"})));
    assert_eq!(get_value_by_pointer(&doc, "//"), Some(&json!("inner")));
}

#[test]
fn parse_and_to_path_agree() {
    assert_eq!(parse_json_pointer("/items/3/units"), to_path("/items/3/units"));
}
