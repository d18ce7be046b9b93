use crate::context::ResourceContext;
use crate::error::DeserializeResult;
use crate::install::{install_base_fields, NoFields};
use cda_model::{GenericResource, ResourceKind};
use serde_json::{Map, Value};

pub(crate) fn build_generic(
    envelope: &Map<String, Value>,
    sys: &Map<String, Value>,
    ctx: &ResourceContext,
) -> DeserializeResult<GenericResource> {
    let (base, ()) = install_base_fields::<NoFields>(ResourceKind::Generic, envelope, sys, ctx)?;
    Ok(GenericResource::new(base))
}
