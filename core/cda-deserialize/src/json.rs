//! Shape-checked access into the JSON tree.
//!
//! Every lookup reports where it failed using a dotted path
//! (e.g. `fields.file.url`) so callers can tell which part of an envelope
//! was wrong.

use crate::error::{DeserializeError, DeserializeResult};
use cda_model::ResourceKind;
use serde_json::{Map, Value};
use std::fmt;

/// The JSON type of a value, used in structural mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Object,
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl JsonShape {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => JsonShape::Object,
            Value::Array(_) => JsonShape::Array,
            Value::String(_) => JsonShape::String,
            Value::Number(_) => JsonShape::Number,
            Value::Bool(_) => JsonShape::Bool,
            Value::Null => JsonShape::Null,
        }
    }
}

impl fmt::Display for JsonShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonShape::Object => "object",
            JsonShape::Array => "array",
            JsonShape::String => "string",
            JsonShape::Number => "number",
            JsonShape::Bool => "boolean",
            JsonShape::Null => "null",
        };
        f.write_str(name)
    }
}

pub(crate) fn child_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}

pub(crate) fn as_object<'a>(value: &'a Value, path: &str) -> DeserializeResult<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| DeserializeError::mismatch(path, JsonShape::Object, JsonShape::of(value)))
}

pub(crate) fn as_array<'a>(value: &'a Value, path: &str) -> DeserializeResult<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| DeserializeError::mismatch(path, JsonShape::Array, JsonShape::of(value)))
}

pub(crate) fn as_str<'a>(value: &'a Value, path: &str) -> DeserializeResult<&'a str> {
    value
        .as_str()
        .ok_or_else(|| DeserializeError::mismatch(path, JsonShape::String, JsonShape::of(value)))
}

/// Looks up `key` in `map`; absence is a missing-attribute error for `kind`.
pub(crate) fn required<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    parent: &str,
    kind: ResourceKind,
) -> DeserializeResult<(&'a Value, String)> {
    let path = child_path(parent, key);
    match map.get(key) {
        Some(value) => Ok((value, path)),
        None => Err(DeserializeError::missing(kind, path)),
    }
}

pub(crate) fn required_object<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    parent: &str,
    kind: ResourceKind,
) -> DeserializeResult<&'a Map<String, Value>> {
    let (value, path) = required(map, key, parent, kind)?;
    as_object(value, &path)
}

pub(crate) fn required_array<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    parent: &str,
    kind: ResourceKind,
) -> DeserializeResult<&'a Vec<Value>> {
    let (value, path) = required(map, key, parent, kind)?;
    as_array(value, &path)
}

pub(crate) fn required_str<'a>(
    map: &'a Map<String, Value>,
    key: &str,
    parent: &str,
    kind: ResourceKind,
) -> DeserializeResult<&'a str> {
    let (value, path) = required(map, key, parent, kind)?;
    as_str(value, &path)
}

/// Reads an optional string attribute. Absent or `null` yields `None`.
pub(crate) fn optional_string(
    map: &Map<String, Value>,
    key: &str,
    parent: &str,
) -> DeserializeResult<Option<String>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => as_str(value, &child_path(parent, key)).map(|s| Some(s.to_string())),
    }
}
