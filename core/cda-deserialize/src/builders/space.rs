use crate::context::ResourceContext;
use crate::error::DeserializeResult;
use crate::install::{install_base_fields, NoFields};
use crate::json;
use cda_model::{Locale, ResourceKind, Space};
use serde::Deserialize;
use serde_json::{Map, Value};

const KIND: ResourceKind = ResourceKind::Space;

pub(crate) fn build_space(
    envelope: &Map<String, Value>,
    sys: &Map<String, Value>,
    ctx: &ResourceContext,
) -> DeserializeResult<Space> {
    let name = json::required_str(envelope, "name", "", KIND)?.to_string();

    let (locales, path) = json::required(envelope, "locales", "", KIND)?;
    json::as_array(locales, &path)?;
    let locales = Vec::<Locale>::deserialize(locales)?;

    let (base, ()) = install_base_fields::<NoFields>(KIND, envelope, sys, ctx)?;
    Ok(Space::new(base, name, locales))
}
