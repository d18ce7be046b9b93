//! Discriminator dispatch: `sys.type` -> per-kind builder.

use crate::builders::{build_asset, build_content_type, build_entry, build_generic, build_space};
use crate::config::UnknownTypePolicy;
use crate::context::ResourceContext;
use crate::error::{DeserializeError, DeserializeResult};
use crate::json;
use cda_model::{Resource, ResourceKind, ResourceType, Space};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Builds one resource from one envelope.
///
/// Returns `Ok(None)` when the envelope has no `sys` object: it is not a
/// resource, and nothing is built. Every other failure is an error and no
/// partially built resource escapes.
pub fn deserialize_resource(
    envelope: &Value,
    ctx: &ResourceContext,
) -> DeserializeResult<Option<Resource>> {
    let envelope = json::as_object(envelope, "$")?;
    let Some(sys) = envelope.get("sys") else {
        debug!("Envelope has no sys, nothing to build");
        return Ok(None);
    };
    let sys = json::as_object(sys, "sys")?;
    let kind = resolve_kind(sys, ctx)?;

    let resource = build(kind, envelope, sys, ctx)?;
    debug!(kind = %kind, id = ?resource.id(), "Deserialized resource");
    Ok(Some(resource))
}

/// Maps `sys.type` to the kind to build, applying the unknown-type policy.
fn resolve_kind(sys: &Map<String, Value>, ctx: &ResourceContext) -> DeserializeResult<ResourceKind> {
    let type_name = json::required_str(sys, "type", "sys", ResourceKind::Generic)?;
    match type_name.parse::<ResourceType>() {
        Ok(resource_type) => Ok(resource_type.kind()),
        Err(unknown) => match ctx.unknown_types() {
            UnknownTypePolicy::Lenient => {
                warn!(resource_type = %unknown.0, "Unknown resource type, building generic resource");
                Ok(ResourceKind::Generic)
            }
            UnknownTypePolicy::Strict => Err(DeserializeError::UnknownResourceType(unknown.0)),
        },
    }
}

fn build(
    kind: ResourceKind,
    envelope: &Map<String, Value>,
    sys: &Map<String, Value>,
    ctx: &ResourceContext,
) -> DeserializeResult<Resource> {
    let resource: Resource = match kind {
        ResourceKind::Asset => build_asset(envelope, sys, ctx)?.into(),
        ResourceKind::Entry => build_entry(envelope, sys, ctx)?.into(),
        ResourceKind::ContentType => build_content_type(envelope, sys, ctx)?.into(),
        ResourceKind::Space => build_space(envelope, sys, ctx)?.into(),
        ResourceKind::Generic => build_generic(envelope, sys, ctx)?.into(),
    };
    Ok(resource)
}

/// Deserializes resource envelopes against a fixed context.
///
/// `Send + Sync`; share one instance across threads as long as the context's
/// space and registry are not replaced mid-pass.
#[derive(Debug, Clone, Default)]
pub struct ResourceDeserializer {
    ctx: ResourceContext,
}

impl ResourceDeserializer {
    pub fn new(ctx: ResourceContext) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &ResourceContext {
        &self.ctx
    }

    /// See [`deserialize_resource`].
    pub fn deserialize(&self, envelope: &Value) -> DeserializeResult<Option<Resource>> {
        deserialize_resource(envelope, &self.ctx)
    }

    /// Parses JSON text, then deserializes it.
    pub fn deserialize_str(&self, json: &str) -> DeserializeResult<Option<Resource>> {
        let envelope: Value = serde_json::from_str(json)?;
        self.deserialize(&envelope)
    }

    /// Parses JSON bytes, then deserializes them.
    pub fn deserialize_slice(&self, bytes: &[u8]) -> DeserializeResult<Option<Resource>> {
        let envelope: Value = serde_json::from_slice(bytes)?;
        self.deserialize(&envelope)
    }

    /// Deserializes each envelope in order, skipping those that are not
    /// resources. Stops at the first error.
    pub fn deserialize_all<'a, I>(&self, envelopes: I) -> DeserializeResult<Vec<Resource>>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut resources = Vec::new();
        for envelope in envelopes {
            if let Some(resource) = self.deserialize(envelope)? {
                resources.push(resource);
            }
        }
        Ok(resources)
    }

    /// Deserializes an envelope that must be a space, e.g. to bootstrap the
    /// active space of a context.
    pub fn deserialize_space(&self, envelope: &Value) -> DeserializeResult<Space> {
        match self.deserialize(envelope)? {
            Some(Resource::Space(space)) => Ok(space),
            Some(other) => Err(DeserializeError::UnexpectedKind {
                expected: ResourceKind::Space,
                actual: other.kind(),
            }),
            None => Err(DeserializeError::MissingAttribute {
                kind: ResourceKind::Space,
                path: "sys".to_string(),
            }),
        }
    }
}
