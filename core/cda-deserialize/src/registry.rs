//! Custom entry types, keyed by content-type id.
//!
//! The registry is populated by the caller before deserializing and is only
//! read by the engine.

use crate::error::BoxError;
use cda_model::CustomEntry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Zero-argument constructor for a custom entry representation.
pub type EntryFactory = Arc<dyn Fn() -> Result<Box<dyn CustomEntry>, BoxError> + Send + Sync>;

/// Maps content-type ids to custom entry factories.
#[derive(Clone, Default)]
pub struct CustomTypeRegistry {
    factories: HashMap<String, EntryFactory>,
}

impl CustomTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` for entries of `content_type_id`, built with `T::default()`.
    /// Replaces any earlier registration for the same id.
    pub fn register<T>(&mut self, content_type_id: impl Into<String>) -> &mut Self
    where
        T: CustomEntry + Default,
    {
        self.register_factory(content_type_id, || Ok(Box::new(T::default()) as Box<dyn CustomEntry>))
    }

    /// Registers a fallible factory for entries of `content_type_id`.
    /// Replaces any earlier registration for the same id.
    pub fn register_factory<F>(&mut self, content_type_id: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Box<dyn CustomEntry>, BoxError> + Send + Sync + 'static,
    {
        self.factories.insert(content_type_id.into(), Arc::new(factory));
        self
    }

    /// The factory registered for `content_type_id`, or `None` when entries of
    /// that content type use the generic representation.
    pub fn resolve(&self, content_type_id: &str) -> Option<&EntryFactory> {
        self.factories.get(content_type_id)
    }

    pub fn contains(&self, content_type_id: &str) -> bool {
        self.factories.contains_key(content_type_id)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Registered content-type ids, in no particular order.
    pub fn content_type_ids(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl fmt::Debug for CustomTypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&str> = self.content_type_ids().collect();
        ids.sort_unstable();
        f.debug_struct("CustomTypeRegistry")
            .field("content_type_ids", &ids)
            .finish()
    }
}
