use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Flat field-id -> raw JSON value mapping for a single locale.
pub type FieldMap = serde_json::Map<String, Value>;

/// Mapped field-shape capability (Entry, Asset).
///
/// Holds the raw field map parsed for one locale and an index from locale
/// code to field map. On construction the index is seeded with the raw map
/// under its locale, sharing the same allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct MappedFields {
    raw: Arc<FieldMap>,
    localized: BTreeMap<String, Arc<FieldMap>>,
}

impl MappedFields {
    /// Creates mapped fields whose raw map is also registered under `locale`.
    pub fn new(locale: impl Into<String>, raw: FieldMap) -> Self {
        let raw = Arc::new(raw);
        let mut localized = BTreeMap::new();
        localized.insert(locale.into(), Arc::clone(&raw));
        Self { raw, localized }
    }

    /// The field map parsed from the envelope.
    pub fn raw(&self) -> &Arc<FieldMap> {
        &self.raw
    }

    /// Locale code -> field map.
    pub fn localized(&self) -> &BTreeMap<String, Arc<FieldMap>> {
        &self.localized
    }

    /// The field map registered for `locale`, if any.
    pub fn for_locale(&self, locale: &str) -> Option<&Arc<FieldMap>> {
        self.localized.get(locale)
    }

    /// Registers (or replaces) the field map for another locale.
    /// Returns the previous map for that locale.
    pub fn insert_locale(
        &mut self,
        locale: impl Into<String>,
        fields: FieldMap,
    ) -> Option<Arc<FieldMap>> {
        self.localized.insert(locale.into(), Arc::new(fields))
    }

    /// Locale codes with a registered field map, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.localized.keys().map(String::as_str)
    }

    /// Looks up a raw field value by id.
    pub fn get(&self, field_id: &str) -> Option<&Value> {
        self.raw.get(field_id)
    }
}

/// Listed field-shape capability (ContentType field definitions).
///
/// Items are kept as parsed, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListedFields(Vec<Value>);

impl ListedFields {
    pub fn new(items: Vec<Value>) -> Self {
        Self(items)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// Finds the definition whose `id` attribute equals `field_id`.
    pub fn find(&self, field_id: &str) -> Option<&Value> {
        self.0
            .iter()
            .find(|def| def.get("id").and_then(Value::as_str) == Some(field_id))
    }

    /// The `id` of every definition that has a string id, in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter_map(|def| def.get("id").and_then(Value::as_str))
    }

    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl<'a> IntoIterator for &'a ListedFields {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
