//! Typed resource model for content-delivery API payloads.
//!
//! Defines the in-memory shapes that the deserialization engine produces:
//! - [`Resource`] — closed set of built resources (Asset, Entry, ContentType, Space, generic)
//! - [`Sys`] — ordered system metadata plus the synthesized reference to the owning [`Space`]
//! - [`MappedFields`] / [`ListedFields`] — the two field-shape capabilities
//! - [`ResourceKind`] / [`FieldShape`] — static description of which capability a kind carries
//! - [`CustomEntry`] — extension point for caller-registered Entry representations
//!
//! This crate holds data only. Building these types from JSON lives in
//! `cda-deserialize`.

mod custom;
mod fields;
mod kind;
mod resource;
mod space;
mod sys;

pub use custom::CustomEntry;
pub use fields::{FieldMap, ListedFields, MappedFields};
pub use kind::{FieldShape, ResourceKind, ResourceType, UnknownResourceType};
pub use resource::{Asset, ContentType, Entry, GenericResource, Resource, ResourceBase};
pub use space::{Locale, Space, DEFAULT_LOCALE};
pub use sys::Sys;
