use crate::space::Space;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// System metadata of a built resource.
///
/// Attributes are copied verbatim from the envelope's `sys` object and keep
/// their document order. The owning [`Space`] is attached as a typed
/// reference under [`Sys::SPACE_KEY`]; when attached it supersedes any raw
/// `space` link the envelope carried.
#[derive(Clone)]
pub struct Sys {
    attributes: Map<String, Value>,
    space: Option<Arc<Space>>,
}

impl Sys {
    /// Key under which the space reference is exposed.
    pub const SPACE_KEY: &'static str = "space";

    pub fn new(attributes: Map<String, Value>, space: Option<Arc<Space>>) -> Self {
        let attributes = if space.is_some() && attributes.contains_key(Self::SPACE_KEY) {
            attributes
                .into_iter()
                .filter(|(key, _)| key != Self::SPACE_KEY)
                .collect()
        } else {
            attributes
        };
        Self { attributes, space }
    }

    /// Raw attributes, in document order. Does not include the space reference.
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Looks up a raw attribute.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// The owning space, if the context had one.
    pub fn space(&self) -> Option<&Arc<Space>> {
        self.space.as_ref()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        (key == Self::SPACE_KEY && self.space.is_some()) || self.attributes.contains_key(key)
    }

    /// All keys: raw attributes in order, then the space key when attached.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes
            .keys()
            .map(String::as_str)
            .chain(self.space.as_ref().map(|_| Self::SPACE_KEY))
    }

    pub fn len(&self) -> usize {
        self.attributes.len() + usize::from(self.space.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// The raw discriminator string.
    pub fn resource_type(&self) -> Option<&str> {
        self.get_str("type")
    }

    pub fn version(&self) -> Option<u64> {
        self.get("version").and_then(Value::as_u64)
    }

    pub fn revision(&self) -> Option<u64> {
        self.get("revision").and_then(Value::as_u64)
    }

    pub fn created_at(&self) -> Option<&str> {
        self.get_str("createdAt")
    }

    pub fn updated_at(&self) -> Option<&str> {
        self.get_str("updatedAt")
    }

    /// `contentType.sys.id`, present on entries.
    pub fn content_type_id(&self) -> Option<&str> {
        self.get("contentType")
            .and_then(|v| v.pointer("/sys/id"))
            .and_then(Value::as_str)
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl PartialEq for Sys {
    fn eq(&self, other: &Self) -> bool {
        let same_space = match (&self.space, &other.space) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b) || a == b,
            _ => false,
        };
        same_space && self.attributes == other.attributes
    }
}

impl fmt::Debug for Sys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Print the space by id only; the space carries its own sys.
        f.debug_struct("Sys")
            .field("attributes", &self.attributes)
            .field("space", &self.space.as_ref().map(|s| s.sys().id()))
            .finish()
    }
}
