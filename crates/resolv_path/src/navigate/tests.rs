//! Tests for the tree walker.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use crate::parse_path;
use pretty_assertions::assert_eq;
use resolv_ir::ErrorKind;
use serde_json::json;

fn doc(json: serde_json::Value) -> Value {
    serde_json::from_value(json).unwrap()
}

fn servers() -> Value {
    doc(json!({
        "server": { "host": "localhost", "port": 8080 },
        "servers": [
            { "name": "api", "host": "api.example.org", "id": 1.0, "enabled": true },
            "not-a-mapping",
            { "name": "db", "host": "db.example.org", "id": 2 },
            { "name": "api", "host": "api-2.example.org", "id": 3 },
            { "host": "nameless.example.org" }
        ],
        "empty": []
    }))
}

fn walk<'v>(root: &'v Value, path: &str) -> Result<&'v Value> {
    navigate(root, &parse_path(path))
}

// === Mappings ===

#[test]
fn nested_keys() {
    let root = servers();
    assert_eq!(walk(&root, "server.host").unwrap(), &Value::from("localhost"));
    assert_eq!(walk(&root, "server.port").unwrap(), &Value::Int(8080));
}

#[test]
fn missing_key_is_not_found() {
    let root = servers();
    let err = walk(&root, "server.user").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("\"user\""));
}

#[test]
fn numeric_token_on_mapping_is_a_key() {
    let root = doc(json!({ "0": "zero" }));
    assert_eq!(walk(&root, "0").unwrap(), &Value::from("zero"));
}

#[test]
fn filter_token_on_mapping_is_a_key() {
    let root = doc(json!({ "[=x]": "odd key" }));
    assert_eq!(walk(&root, "[=x]").unwrap(), &Value::from("odd key"));
}

#[test]
fn returns_subtree_unchanged() {
    let root = servers();
    let server = walk(&root, "server").unwrap();
    assert_eq!(server, &doc(json!({ "host": "localhost", "port": 8080 })));
}

#[test]
fn no_segments_returns_root() {
    let root = servers();
    let none: [&str; 0] = [];
    assert_eq!(navigate(&root, &none).unwrap(), &root);
}

// === Indexes ===

#[test]
fn index_lookup() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.2.name").unwrap(),
        &Value::from("db")
    );
}

#[test]
fn index_out_of_bounds_is_not_found() {
    let root = servers();
    assert_eq!(walk(&root, "servers.5").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(walk(&root, "empty.0").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn negative_index_is_not_found() {
    let root = servers();
    assert_eq!(walk(&root, "servers.-1").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn non_index_token_on_sequence_is_bad_path() {
    let root = servers();
    let err = walk(&root, "servers.first").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadPath);
    assert!(err.to_string().contains("not a valid array index or filter"));
}

#[test]
fn empty_token_on_sequence_is_bad_path() {
    let root = servers();
    assert_eq!(walk(&root, "servers.").unwrap_err().kind(), ErrorKind::BadPath);
}

// === Filters ===

#[test]
fn filter_by_string_field() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.[name=db].host").unwrap(),
        &Value::from("db.example.org")
    );
}

#[test]
fn filter_value_with_dots() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.[host=db.example.org].name").unwrap(),
        &Value::from("db")
    );
}

#[test]
fn filter_first_match_wins() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.[name=api].host").unwrap(),
        &Value::from("api.example.org")
    );
}

#[test]
fn filter_int_matches_float_field() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.[id=1].name").unwrap(),
        &Value::from("api")
    );
}

#[test]
fn filter_bool_field() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.[enabled=true].id").unwrap(),
        &Value::Float(1.0)
    );
}

#[test]
fn filter_quoted_value() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.[name='db'].id").unwrap(),
        &Value::Int(2)
    );
    assert_eq!(
        walk(&root, "servers.[name=\"db\"].id").unwrap(),
        &Value::Int(2)
    );
}

#[test]
fn filter_quoted_number_still_coerces() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.[id=\"3\"].host").unwrap(),
        &Value::from("api-2.example.org")
    );
}

#[test]
fn filter_skips_elements_without_field() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.[host=nameless.example.org]").unwrap(),
        &doc(json!({ "host": "nameless.example.org" }))
    );
}

#[test]
fn filter_without_match_is_not_found() {
    let root = servers();
    let err = walk(&root, "servers.[name=cache]").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("name=cache"));
}

#[test]
fn filter_with_empty_field_is_bad_path() {
    let root = servers();
    assert_eq!(
        walk(&root, "servers.[ =api]").unwrap_err().kind(),
        ErrorKind::BadPath
    );
}

// === Scalars ===

#[test]
fn descending_into_scalar_is_not_found() {
    let root = servers();
    let err = walk(&root, "server.port.value").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.to_string().contains("on int"));
}

#[test]
fn error_stops_the_walk() {
    let root = servers();
    // fails at "missing" even though the rest would be valid elsewhere
    let err = walk(&root, "missing.servers.0").unwrap_err();
    assert!(err.to_string().contains("\"missing\""));
}

// === Properties ===

mod proptest_navigate {
    use super::super::navigate;
    use proptest::prelude::*;
    use resolv_ir::Value;

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            (-1.0e6f64..1.0e6).prop_map(Value::Float),
            "[a-z ]{0,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
                prop::collection::btree_map("[a-z0-9.\\[\\]=]{0,6}", inner, 0..4)
                    .prop_map(Value::Mapping),
            ]
        })
    }

    fn leaves(value: &Value, path: &mut Vec<String>, out: &mut Vec<(Vec<String>, Value)>) {
        match value {
            Value::Mapping(map) => {
                for (key, child) in map {
                    path.push(key.clone());
                    leaves(child, path, out);
                    path.pop();
                }
            }
            Value::Sequence(items) => {
                for (index, child) in items.iter().enumerate() {
                    path.push(index.to_string());
                    leaves(child, path, out);
                    path.pop();
                }
            }
            leaf => out.push((path.clone(), leaf.clone())),
        }
    }

    proptest! {
        #[test]
        fn construction_path_reaches_leaf(root in arb_value()) {
            let mut found = Vec::new();
            leaves(&root, &mut Vec::new(), &mut found);
            for (path, leaf) in found {
                let reached = navigate(&root, &path);
                prop_assert!(reached.is_ok(), "path {:?} failed: {:?}", path, reached.as_ref().err());
                prop_assert_eq!(reached.ok(), Some(&leaf));
            }
        }
    }
}
