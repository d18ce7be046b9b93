//! Polymorphic deserialization of content-delivery API resource envelopes.
//!
//! Turns a JSON envelope (`{"sys": {"type": ...}, ...}`) into a typed
//! [`cda_model::Resource`]:
//! - the dispatcher reads `sys.type` and picks a builder
//! - per-kind builders (Asset, Entry, ContentType, Space, generic) read
//!   their kind-specific attributes
//! - Entry builders consult the [`CustomTypeRegistry`] for a caller-registered
//!   representation keyed by content-type id
//! - a shared installer copies `sys`, attaches the active space, and installs
//!   mapped or listed fields depending on the kind
//!
//! All inputs besides the envelope come from a read-only [`ResourceContext`].
//!
//! ```
//! use cda_deserialize::{ResourceContext, ResourceDeserializer};
//! use serde_json::json;
//!
//! let deserializer = ResourceDeserializer::new(ResourceContext::default());
//! let space = deserializer
//!     .deserialize_space(&json!({
//!         "sys": {"id": "demo", "type": "Space"},
//!         "name": "Demo",
//!         "locales": [{"code": "en-US", "default": true}]
//!     }))
//!     .unwrap();
//! assert_eq!(space.default_locale(), "en-US");
//! ```

mod builders;
mod config;
mod context;
mod dispatcher;
mod error;
mod install;
mod json;
mod registry;

pub use config::{DeserializerConfig, UnknownTypePolicy};
pub use context::{ResourceContext, ResourceContextBuilder};
pub use dispatcher::{deserialize_resource, ResourceDeserializer};
pub use error::{BoxError, ConfigError, DeserializeError, DeserializeResult};
pub use json::JsonShape;
pub use registry::{CustomTypeRegistry, EntryFactory};
