use cda_model::{FieldShape, ResourceKind, ResourceType};
use std::str::FromStr;

// ── ResourceType parsing ─────────────────────────────────────────

#[test]
fn parses_every_known_type() {
    for t in ResourceType::ALL {
        assert_eq!(ResourceType::from_str(t.as_str()).unwrap(), t);
    }
}

#[test]
fn parse_is_case_sensitive() {
    assert!("entry".parse::<ResourceType>().is_err());
    assert!("ENTRY".parse::<ResourceType>().is_err());
}

#[test]
fn parse_unknown_keeps_the_input() {
    let err = "DeletedEntry".parse::<ResourceType>().unwrap_err();
    assert_eq!(err.0, "DeletedEntry");
    assert_eq!(err.to_string(), "unknown resource type: DeletedEntry");
}

#[test]
fn display_matches_wire_name() {
    assert_eq!(ResourceType::ContentType.to_string(), "ContentType");
}

// ── Kind mapping ─────────────────────────────────────────────────

#[test]
fn modelled_types_map_to_their_kind() {
    assert_eq!(ResourceType::Asset.kind(), ResourceKind::Asset);
    assert_eq!(ResourceType::Entry.kind(), ResourceKind::Entry);
    assert_eq!(ResourceType::ContentType.kind(), ResourceKind::ContentType);
    assert_eq!(ResourceType::Space.kind(), ResourceKind::Space);
}

#[test]
fn unmodelled_types_map_to_generic() {
    assert_eq!(ResourceType::Array.kind(), ResourceKind::Generic);
    assert_eq!(ResourceType::Link.kind(), ResourceKind::Generic);
}

// ── Field shapes ─────────────────────────────────────────────────

#[test]
fn entries_and_assets_have_mapped_fields() {
    assert_eq!(ResourceKind::Entry.field_shape(), FieldShape::Mapped);
    assert_eq!(ResourceKind::Asset.field_shape(), FieldShape::Mapped);
}

#[test]
fn content_types_have_listed_fields() {
    assert_eq!(ResourceKind::ContentType.field_shape(), FieldShape::Listed);
}

#[test]
fn spaces_and_generic_have_no_fields() {
    assert_eq!(ResourceKind::Space.field_shape(), FieldShape::None);
    assert_eq!(ResourceKind::Generic.field_shape(), FieldShape::None);
}

#[test]
fn kind_serde_is_snake_case() {
    let json = serde_json::to_string(&ResourceKind::ContentType).unwrap();
    assert_eq!(json, r#""content_type""#);
}
