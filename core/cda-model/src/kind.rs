use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The discriminator vocabulary found at `sys.type`.
///
/// This is the full enumerated list of types the delivery API emits. Only
/// some of them have a dedicated builder; see [`ResourceType::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    Array,
    Asset,
    ContentType,
    Entry,
    Link,
    Space,
}

impl ResourceType {
    /// All discriminator values, in declaration order.
    pub const ALL: [ResourceType; 6] = [
        ResourceType::Array,
        ResourceType::Asset,
        ResourceType::ContentType,
        ResourceType::Entry,
        ResourceType::Link,
        ResourceType::Space,
    ];

    /// The exact string used on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            ResourceType::Array => "Array",
            ResourceType::Asset => "Asset",
            ResourceType::ContentType => "ContentType",
            ResourceType::Entry => "Entry",
            ResourceType::Link => "Link",
            ResourceType::Space => "Space",
        }
    }

    /// The kind of object built for this discriminator.
    /// `Array` and `Link` have no dedicated representation.
    pub const fn kind(self) -> ResourceKind {
        match self {
            ResourceType::Asset => ResourceKind::Asset,
            ResourceType::ContentType => ResourceKind::ContentType,
            ResourceType::Entry => ResourceKind::Entry,
            ResourceType::Space => ResourceKind::Space,
            ResourceType::Array | ResourceType::Link => ResourceKind::Generic,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a `sys.type` string is not part of [`ResourceType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResourceType(pub String);

impl fmt::Display for UnknownResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown resource type: {}", self.0)
    }
}

impl std::error::Error for UnknownResourceType {}

impl FromStr for ResourceType {
    type Err = UnknownResourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownResourceType(s.to_string()))
    }
}

/// The closed set of objects the engine can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Asset,
    Entry,
    ContentType,
    Space,
    /// Fallback carrying only `sys`.
    Generic,
}

impl ResourceKind {
    /// Which field-shape capability objects of this kind expose.
    ///
    /// Fixed per kind; the installer branches on this once per object.
    pub const fn field_shape(self) -> FieldShape {
        match self {
            ResourceKind::Asset | ResourceKind::Entry => FieldShape::Mapped,
            ResourceKind::ContentType => FieldShape::Listed,
            ResourceKind::Space | ResourceKind::Generic => FieldShape::None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Asset => "Asset",
            ResourceKind::Entry => "Entry",
            ResourceKind::ContentType => "ContentType",
            ResourceKind::Space => "Space",
            ResourceKind::Generic => "Resource",
        };
        f.write_str(name)
    }
}

/// The field-shape capability of a resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldShape {
    /// Flat id -> value map for one locale, plus a per-locale index.
    Mapped,
    /// Ordered sequence parsed from a JSON array (field definitions).
    Listed,
    /// No content fields beyond the kind's own attributes.
    None,
}
