use crate::custom::CustomEntry;
use crate::fields::{FieldMap, ListedFields, MappedFields};
use crate::kind::ResourceKind;
use crate::space::Space;
use crate::sys::Sys;
use serde_json::{Map, Value};
use std::any::Any;
use std::fmt;

/// State shared by every built resource: system metadata and, for kinds with
/// mapped fields, the locale the fields were populated under.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceBase {
    sys: Sys,
    locale: Option<String>,
}

impl ResourceBase {
    pub fn new(sys: Sys, locale: Option<String>) -> Self {
        Self { sys, locale }
    }

    pub fn sys(&self) -> &Sys {
        &self.sys
    }

    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }
}

fn active_fields<'a>(base: &ResourceBase, fields: &'a MappedFields) -> &'a FieldMap {
    base.locale()
        .and_then(|code| fields.for_locale(code))
        .unwrap_or_else(|| fields.raw())
}

fn switch_locale(base: &mut ResourceBase, fields: &MappedFields, code: &str) -> bool {
    if fields.for_locale(code).is_none() {
        return false;
    }
    base.locale = Some(code.to_string());
    true
}

/// A binary asset (image, document, ...) with its resolved URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    base: ResourceBase,
    fields: MappedFields,
    url: String,
    mime_type: String,
}

impl Asset {
    pub fn new(
        base: ResourceBase,
        fields: MappedFields,
        url: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            base,
            fields,
            url: url.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn sys(&self) -> &Sys {
        self.base.sys()
    }

    pub fn locale(&self) -> Option<&str> {
        self.base.locale()
    }

    /// Fully-qualified URL of the file, including the transport scheme.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Fields for the active locale.
    pub fn fields(&self) -> &FieldMap {
        active_fields(&self.base, &self.fields)
    }

    pub fn mapped_fields(&self) -> &MappedFields {
        &self.fields
    }

    pub fn mapped_fields_mut(&mut self) -> &mut MappedFields {
        &mut self.fields
    }

    /// Switches the active locale. Returns `false` if no fields are
    /// registered for `code`.
    pub fn set_locale(&mut self, code: &str) -> bool {
        switch_locale(&mut self.base, &self.fields, code)
    }

    /// The `file` sub-object of the active locale's fields.
    pub fn file(&self) -> Option<&Map<String, Value>> {
        self.fields().get("file").and_then(Value::as_object)
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file()
            .and_then(|f| f.get("fileName"))
            .and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields().get("title").and_then(Value::as_str)
    }
}

/// A content type: the schema entries of one kind are built against.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentType {
    base: ResourceBase,
    fields: ListedFields,
    display_field: Option<String>,
    name: Option<String>,
    description: Option<String>,
}

impl ContentType {
    pub fn new(
        base: ResourceBase,
        fields: ListedFields,
        display_field: Option<String>,
        name: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            base,
            fields,
            display_field,
            name,
            description,
        }
    }

    pub fn sys(&self) -> &Sys {
        self.base.sys()
    }

    /// Field definitions, in document order.
    pub fn fields(&self) -> &ListedFields {
        &self.fields
    }

    pub fn display_field(&self) -> Option<&str> {
        self.display_field.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The field definition with the given id.
    pub fn field(&self, field_id: &str) -> Option<&Value> {
        self.fields.find(field_id)
    }
}

/// An entry of some content type.
///
/// Either generic, or carrying a custom representation registered for its
/// content type.
pub struct Entry {
    base: ResourceBase,
    fields: MappedFields,
    content_type_id: String,
    custom: Option<Box<dyn CustomEntry>>,
}

impl Entry {
    /// A generic entry.
    pub fn new(base: ResourceBase, fields: MappedFields, content_type_id: impl Into<String>) -> Self {
        Self {
            base,
            fields,
            content_type_id: content_type_id.into(),
            custom: None,
        }
    }

    /// An entry carrying a custom representation.
    pub fn with_custom(
        base: ResourceBase,
        fields: MappedFields,
        content_type_id: impl Into<String>,
        custom: Box<dyn CustomEntry>,
    ) -> Self {
        Self {
            custom: Some(custom),
            ..Self::new(base, fields, content_type_id)
        }
    }

    pub fn sys(&self) -> &Sys {
        self.base.sys()
    }

    pub fn locale(&self) -> Option<&str> {
        self.base.locale()
    }

    pub fn content_type_id(&self) -> &str {
        &self.content_type_id
    }

    /// Fields for the active locale.
    pub fn fields(&self) -> &FieldMap {
        active_fields(&self.base, &self.fields)
    }

    pub fn mapped_fields(&self) -> &MappedFields {
        &self.fields
    }

    pub fn mapped_fields_mut(&mut self) -> &mut MappedFields {
        &mut self.fields
    }

    /// Switches the active locale. Returns `false` if no fields are
    /// registered for `code`.
    pub fn set_locale(&mut self, code: &str) -> bool {
        switch_locale(&mut self.base, &self.fields, code)
    }

    pub fn field(&self, field_id: &str) -> Option<&Value> {
        self.fields().get(field_id)
    }

    pub fn is_custom(&self) -> bool {
        self.custom.is_some()
    }

    /// Whether the custom representation is a `T`.
    pub fn is<T: CustomEntry>(&self) -> bool {
        self.custom::<T>().is_some()
    }

    /// The custom representation, if it is a `T`.
    pub fn custom<T: CustomEntry>(&self) -> Option<&T> {
        let custom: &dyn Any = self.custom.as_deref()?;
        custom.downcast_ref::<T>()
    }

    pub fn custom_mut<T: CustomEntry>(&mut self) -> Option<&mut T> {
        let custom: &mut dyn Any = self.custom.as_deref_mut()?;
        custom.downcast_mut::<T>()
    }

    pub fn custom_entry(&self) -> Option<&dyn CustomEntry> {
        self.custom.as_deref()
    }

    /// Name of the concrete representation: `"Entry"` for generic entries.
    pub fn representation_name(&self) -> &'static str {
        self.custom.as_deref().map_or("Entry", |c| c.type_name())
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
            && self.fields == other.fields
            && self.content_type_id == other.content_type_id
            && self.representation_name() == other.representation_name()
    }
}

impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("base", &self.base)
            .field("fields", &self.fields)
            .field("content_type_id", &self.content_type_id)
            .field("custom", &self.custom)
            .finish()
    }
}

/// Any resource without a dedicated representation. Carries only `sys`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericResource {
    base: ResourceBase,
}

impl GenericResource {
    pub fn new(base: ResourceBase) -> Self {
        Self { base }
    }

    pub fn sys(&self) -> &Sys {
        self.base.sys()
    }
}

/// One built resource.
#[derive(Debug, PartialEq)]
pub enum Resource {
    Asset(Asset),
    Entry(Entry),
    ContentType(ContentType),
    Space(Space),
    Generic(GenericResource),
}

impl Resource {
    pub fn kind(&self) -> ResourceKind {
        match self {
            Resource::Asset(_) => ResourceKind::Asset,
            Resource::Entry(_) => ResourceKind::Entry,
            Resource::ContentType(_) => ResourceKind::ContentType,
            Resource::Space(_) => ResourceKind::Space,
            Resource::Generic(_) => ResourceKind::Generic,
        }
    }

    pub fn base(&self) -> &ResourceBase {
        match self {
            Resource::Asset(r) => &r.base,
            Resource::Entry(r) => &r.base,
            Resource::ContentType(r) => &r.base,
            Resource::Space(r) => r.base(),
            Resource::Generic(r) => &r.base,
        }
    }

    pub fn sys(&self) -> &Sys {
        self.base().sys()
    }

    pub fn id(&self) -> Option<&str> {
        self.sys().id()
    }

    pub fn locale(&self) -> Option<&str> {
        self.base().locale()
    }

    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            Resource::Asset(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Resource::Entry(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_content_type(&self) -> Option<&ContentType> {
        match self {
            Resource::ContentType(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_space(&self) -> Option<&Space> {
        match self {
            Resource::Space(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_entry(self) -> Option<Entry> {
        match self {
            Resource::Entry(r) => Some(r),
            _ => None,
        }
    }

    pub fn into_space(self) -> Option<Space> {
        match self {
            Resource::Space(r) => Some(r),
            _ => None,
        }
    }
}

impl From<Asset> for Resource {
    fn from(r: Asset) -> Self {
        Resource::Asset(r)
    }
}

impl From<Entry> for Resource {
    fn from(r: Entry) -> Self {
        Resource::Entry(r)
    }
}

impl From<ContentType> for Resource {
    fn from(r: ContentType) -> Self {
        Resource::ContentType(r)
    }
}

impl From<Space> for Resource {
    fn from(r: Space) -> Self {
        Resource::Space(r)
    }
}

impl From<GenericResource> for Resource {
    fn from(r: GenericResource) -> Self {
        Resource::Generic(r)
    }
}
