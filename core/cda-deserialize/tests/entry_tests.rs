use cda_deserialize::{
    BoxError, CustomTypeRegistry, DeserializeError, JsonShape, ResourceContext, ResourceDeserializer,
};
use cda_model::{CustomEntry, FieldMap, ResourceKind, Space};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::error::Error as _;
use std::sync::Arc;

fn active_space() -> Arc<Space> {
    let envelope = json!({
        "sys": {"id": "demo", "type": "Space"},
        "name": "Demo",
        "locales": [{"code": "en-US", "default": true}, {"code": "de", "default": false}]
    });
    Arc::new(ResourceDeserializer::default().deserialize_space(&envelope).unwrap())
}

fn deserializer_with(registry: CustomTypeRegistry) -> ResourceDeserializer {
    ResourceDeserializer::new(
        ResourceContext::builder()
            .space(active_space())
            .registry(Arc::new(registry))
            .build(),
    )
}

fn entry_envelope(content_type_id: &str, fields: Value) -> Value {
    json!({
        "sys": {
            "id": "e1",
            "type": "Entry",
            "contentType": {"sys": {"type": "Link", "linkType": "ContentType", "id": content_type_id}}
        },
        "fields": fields
    })
}

// ── Custom types ─────────────────────────────────────────────────

#[derive(Debug, Default)]
struct Cat {
    name: String,
    lives: u64,
}

impl CustomEntry for Cat {
    fn hydrate(&mut self, fields: &FieldMap) -> Result<(), BoxError> {
        self.name = fields
            .get("name")
            .and_then(Value::as_str)
            .ok_or("cat needs a name")?
            .to_string();
        self.lives = fields.get("lives").and_then(Value::as_u64).unwrap_or(9);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct BlogPost;

impl CustomEntry for BlogPost {}

#[derive(Debug)]
struct Broken;

impl CustomEntry for Broken {}

// ── Generic entries ──────────────────────────────────────────────

#[test]
fn unregistered_content_type_builds_generic_entry() {
    let envelope = entry_envelope("blogPost", json!({"title": "Hello", "body": "World"}));
    let resource = deserializer_with(CustomTypeRegistry::new())
        .deserialize(&envelope)
        .unwrap()
        .unwrap();

    let entry = resource.as_entry().unwrap();
    assert!(!entry.is_custom());
    assert_eq!(entry.content_type_id(), "blogPost");
    assert_eq!(entry.field("title"), Some(&json!("Hello")));
    assert_eq!(entry.mapped_fields().raw().len(), 2);
}

#[test]
fn entry_localized_fields_share_raw_fields() {
    let envelope = entry_envelope("blogPost", json!({"title": "Hello"}));
    let resource = deserializer_with(CustomTypeRegistry::new())
        .deserialize(&envelope)
        .unwrap()
        .unwrap();

    let entry = resource.as_entry().unwrap();
    assert_eq!(entry.locale(), Some("en-US"));
    let fields = entry.mapped_fields();
    assert!(Arc::ptr_eq(fields.raw(), fields.for_locale("en-US").unwrap()));
    assert_eq!(fields.localized().len(), 1);
}

#[test]
fn entry_sys_references_active_space() {
    let space = active_space();
    let deserializer = ResourceDeserializer::new(ResourceContext::builder().space(Arc::clone(&space)).build());
    let resource = deserializer
        .deserialize(&entry_envelope("blogPost", json!({})))
        .unwrap()
        .unwrap();
    assert!(Arc::ptr_eq(resource.sys().space().unwrap(), &space));
}

// ── Registered entries ───────────────────────────────────────────

#[test]
fn registered_content_type_builds_custom_entry() {
    let mut registry = CustomTypeRegistry::new();
    registry.register::<Cat>("cat").register::<BlogPost>("blogPost");

    let envelope = entry_envelope("cat", json!({"name": "Nyan", "lives": 7}));
    let resource = deserializer_with(registry).deserialize(&envelope).unwrap().unwrap();

    let entry = resource.as_entry().unwrap();
    assert!(entry.is::<Cat>());
    assert!(!entry.is::<BlogPost>());
    let cat = entry.custom::<Cat>().unwrap();
    assert_eq!(cat.name, "Nyan");
    assert_eq!(cat.lives, 7);
    // generic data stays available
    assert_eq!(entry.field("name"), Some(&json!("Nyan")));
}

#[test]
fn registration_only_applies_to_its_content_type() {
    let mut registry = CustomTypeRegistry::new();
    registry.register::<Cat>("cat");

    let resource = deserializer_with(registry)
        .deserialize(&entry_envelope("dog", json!({"name": "Rex"})))
        .unwrap()
        .unwrap();
    assert!(!resource.as_entry().unwrap().is_custom());
}

#[test]
fn failing_factory_is_an_instantiation_error() {
    let mut registry = CustomTypeRegistry::new();
    registry.register_factory("broken", || Err("constructor panicked politely".into()));

    let err = deserializer_with(registry)
        .deserialize(&entry_envelope("broken", json!({})))
        .unwrap_err();
    match &err {
        DeserializeError::CustomTypeInstantiation { content_type_id, source } => {
            assert_eq!(content_type_id, "broken");
            assert_eq!(source.to_string(), "constructor panicked politely");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.source().is_some());
}

#[test]
fn factory_may_build_any_custom_type() {
    let mut registry = CustomTypeRegistry::new();
    registry.register_factory("broken", || Ok(Box::new(Broken) as Box<dyn CustomEntry>));

    let resource = deserializer_with(registry)
        .deserialize(&entry_envelope("broken", json!({})))
        .unwrap()
        .unwrap();
    assert!(resource.as_entry().unwrap().is::<Broken>());
}

#[test]
fn hydrate_failure_is_an_error() {
    let mut registry = CustomTypeRegistry::new();
    registry.register::<Cat>("cat");

    let err = deserializer_with(registry)
        .deserialize(&entry_envelope("cat", json!({"lives": 3})))
        .unwrap_err();
    match err {
        DeserializeError::CustomTypeHydration { content_type_id, source } => {
            assert_eq!(content_type_id, "cat");
            assert_eq!(source.to_string(), "cat needs a name");
        }
        other => panic!("unexpected error: {other}"),
    }
}

// ── Structural errors ────────────────────────────────────────────

#[test]
fn entry_requires_content_type_id() {
    let envelope = json!({"sys": {"type": "Entry", "id": "e1"}, "fields": {}});
    let err = deserializer_with(CustomTypeRegistry::new()).deserialize(&envelope).unwrap_err();
    match err {
        DeserializeError::MissingAttribute { kind, path } => {
            assert_eq!(kind, ResourceKind::Entry);
            assert_eq!(path, "sys.contentType");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn entry_requires_nested_content_type_sys_id() {
    let envelope = json!({"sys": {"type": "Entry", "contentType": {"sys": {}}}, "fields": {}});
    let err = deserializer_with(CustomTypeRegistry::new()).deserialize(&envelope).unwrap_err();
    match err {
        DeserializeError::MissingAttribute { path, .. } => assert_eq!(path, "sys.contentType.sys.id"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn entry_fields_must_be_an_object() {
    let envelope = entry_envelope("blogPost", json!(["title"]));
    let err = deserializer_with(CustomTypeRegistry::new()).deserialize(&envelope).unwrap_err();
    match err {
        DeserializeError::StructuralMismatch { path, expected, found } => {
            assert_eq!(path, "fields");
            assert_eq!(expected, JsonShape::Object);
            assert_eq!(found, JsonShape::Array);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn entry_without_fields_is_an_error() {
    let envelope = json!({
        "sys": {"type": "Entry", "contentType": {"sys": {"id": "blogPost"}}}
    });
    let err = deserializer_with(CustomTypeRegistry::new()).deserialize(&envelope).unwrap_err();
    assert!(matches!(err, DeserializeError::MissingAttribute { kind: ResourceKind::Entry, .. }));
}

// ── Locales ──────────────────────────────────────────────────────

#[test]
fn entry_can_switch_to_added_locale() {
    let resource = deserializer_with(CustomTypeRegistry::new())
        .deserialize(&entry_envelope("blogPost", json!({"title": "Hello"})))
        .unwrap()
        .unwrap();
    let mut entry = resource.into_entry().unwrap();

    let german = json!({"title": "Hallo"}).as_object().cloned().unwrap();
    entry.mapped_fields_mut().insert_locale("de", german);
    assert!(entry.set_locale("de"));
    assert_eq!(entry.field("title"), Some(&json!("Hallo")));
    assert_eq!(entry.mapped_fields().raw().get("title"), Some(&json!("Hello")));
}
