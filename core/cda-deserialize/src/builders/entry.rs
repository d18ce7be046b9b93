use crate::context::ResourceContext;
use crate::error::{DeserializeError, DeserializeResult};
use crate::install::{install_base_fields, MappedCapability};
use crate::json;
use cda_model::{Entry, ResourceKind};
use serde_json::{Map, Value};
use tracing::debug;

const KIND: ResourceKind = ResourceKind::Entry;

/// Builds an entry, using the custom representation registered for its
/// content type when there is one.
pub(crate) fn build_entry(
    envelope: &Map<String, Value>,
    sys: &Map<String, Value>,
    ctx: &ResourceContext,
) -> DeserializeResult<Entry> {
    let link = json::required_object(sys, "contentType", "sys", KIND)?;
    let link_sys = json::required_object(link, "sys", "sys.contentType", KIND)?;
    let content_type_id = json::required_str(link_sys, "id", "sys.contentType.sys", KIND)?.to_string();

    let custom = match ctx.registry().resolve(&content_type_id) {
        Some(factory) => Some(factory().map_err(|source| {
            DeserializeError::CustomTypeInstantiation {
                content_type_id: content_type_id.clone(),
                source,
            }
        })?),
        None => None,
    };

    let (base, fields) = install_base_fields::<MappedCapability>(KIND, envelope, sys, ctx)?;

    let Some(mut custom) = custom else {
        return Ok(Entry::new(base, fields, content_type_id));
    };

    custom
        .hydrate(fields.raw())
        .map_err(|source| DeserializeError::CustomTypeHydration {
            content_type_id: content_type_id.clone(),
            source,
        })?;
    debug!(
        content_type_id = %content_type_id,
        representation = custom.type_name(),
        "Built custom entry"
    );
    Ok(Entry::with_custom(base, fields, content_type_id, custom))
}
