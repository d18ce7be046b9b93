use crate::context::ResourceContext;
use crate::error::DeserializeResult;
use crate::install::{install_base_fields, ListedCapability};
use crate::json;
use cda_model::{ContentType, ResourceKind};
use serde_json::{Map, Value};

const KIND: ResourceKind = ResourceKind::ContentType;

pub(crate) fn build_content_type(
    envelope: &Map<String, Value>,
    sys: &Map<String, Value>,
    ctx: &ResourceContext,
) -> DeserializeResult<ContentType> {
    let display_field = json::optional_string(envelope, "displayField", "")?;
    let name = json::optional_string(envelope, "name", "")?;
    let description = json::optional_string(envelope, "description", "")?;

    let (base, fields) = install_base_fields::<ListedCapability>(KIND, envelope, sys, ctx)?;
    Ok(ContentType::new(base, fields, display_field, name, description))
}
