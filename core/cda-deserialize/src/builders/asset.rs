use crate::context::ResourceContext;
use crate::error::DeserializeResult;
use crate::install::{install_base_fields, MappedCapability};
use crate::json;
use cda_model::{Asset, ResourceKind};
use serde_json::{Map, Value};

const KIND: ResourceKind = ResourceKind::Asset;

/// Builds an asset. `fields.file.url` is scheme-relative and gets the
/// context's transport scheme prefixed.
pub(crate) fn build_asset(
    envelope: &Map<String, Value>,
    sys: &Map<String, Value>,
    ctx: &ResourceContext,
) -> DeserializeResult<Asset> {
    let (base, fields) = install_base_fields::<MappedCapability>(KIND, envelope, sys, ctx)?;

    let file = json::required_object(fields.raw(), "file", "fields", KIND)?;
    let url = json::required_str(file, "url", "fields.file", KIND)?;
    let url = format!("{}:{}", ctx.http_scheme(), url);
    let mime_type = json::required_str(file, "contentType", "fields.file", KIND)?.to_string();

    Ok(Asset::new(base, fields, url, mime_type))
}
