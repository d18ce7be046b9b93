use cda_model::{FieldMap, ListedFields, MappedFields};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;

fn field_map(value: serde_json::Value) -> FieldMap {
    value.as_object().cloned().unwrap()
}

// ── MappedFields ─────────────────────────────────────────────────

#[test]
fn new_seeds_locale_with_same_allocation() {
    let fields = MappedFields::new("en-US", field_map(json!({"title": "Hello"})));
    let localized = fields.for_locale("en-US").unwrap();
    assert!(Arc::ptr_eq(fields.raw(), localized));
    assert_eq!(fields.localized().len(), 1);
}

#[test]
fn get_reads_raw_fields() {
    let fields = MappedFields::new("en-US", field_map(json!({"title": "Hello", "n": 3})));
    assert_eq!(fields.get("n"), Some(&json!(3)));
    assert_eq!(fields.get("missing"), None);
}

#[test]
fn insert_locale_adds_without_touching_raw() {
    let mut fields = MappedFields::new("en-US", field_map(json!({"title": "Hello"})));
    let previous = fields.insert_locale("de", field_map(json!({"title": "Hallo"})));
    assert!(previous.is_none());

    assert_eq!(fields.locales().collect::<Vec<_>>(), vec!["de", "en-US"]);
    assert_eq!(fields.get("title"), Some(&json!("Hello")));
    assert_eq!(fields.for_locale("de").unwrap().get("title"), Some(&json!("Hallo")));
}

#[test]
fn equality_is_structural() {
    let a = MappedFields::new("en-US", field_map(json!({"a": 1})));
    let b = MappedFields::new("en-US", field_map(json!({"a": 1})));
    assert_eq!(a, b);
}

// ── ListedFields ─────────────────────────────────────────────────

#[test]
fn listed_fields_keep_order() {
    let fields = ListedFields::new(vec![
        json!({"id": "title", "type": "Symbol"}),
        json!({"id": "body", "type": "Text"}),
    ]);
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.ids().collect::<Vec<_>>(), vec!["title", "body"]);
}

#[test]
fn find_by_id() {
    let fields = ListedFields::new(vec![json!({"id": "title", "type": "Symbol"})]);
    assert_eq!(fields.find("title").unwrap()["type"], json!("Symbol"));
    assert!(fields.find("body").is_none());
}

#[test]
fn ids_skip_definitions_without_string_id() {
    let fields = ListedFields::new(vec![json!({"id": 7}), json!({"name": "x"}), json!({"id": "ok"})]);
    assert_eq!(fields.ids().collect::<Vec<_>>(), vec!["ok"]);
}

#[test]
fn default_is_empty() {
    let fields = ListedFields::default();
    assert!(fields.is_empty());
    assert_eq!((&fields).into_iter().count(), 0);
}
