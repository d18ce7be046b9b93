//! Base-field installer shared by every builder.
//!
//! Installs `sys` (with the synthesized space reference) and then the
//! content fields for exactly one field-shape capability. The capability is
//! chosen statically by each builder through a marker type, and always
//! agrees with [`ResourceKind::field_shape`].

use crate::context::ResourceContext;
use crate::error::{DeserializeError, DeserializeResult};
use crate::json;
use cda_model::{FieldShape, ListedFields, MappedFields, ResourceBase, ResourceKind, Sys};
use serde_json::{Map, Value};

/// A field-shape capability and how to install it from an envelope.
pub(crate) trait FieldCapability {
    const SHAPE: FieldShape;

    type Fields;

    /// Returns the locale the fields were installed under (if any) and the fields.
    fn install(
        kind: ResourceKind,
        envelope: &Map<String, Value>,
        ctx: &ResourceContext,
    ) -> DeserializeResult<(Option<String>, Self::Fields)>;
}

/// `fields` is an object, installed under the space's default locale.
pub(crate) struct MappedCapability;

/// `fields` is an array, installed in order with no locale.
pub(crate) struct ListedCapability;

/// No content fields.
pub(crate) struct NoFields;

impl FieldCapability for MappedCapability {
    const SHAPE: FieldShape = FieldShape::Mapped;

    type Fields = MappedFields;

    fn install(
        kind: ResourceKind,
        envelope: &Map<String, Value>,
        ctx: &ResourceContext,
    ) -> DeserializeResult<(Option<String>, MappedFields)> {
        let space = ctx
            .space()
            .ok_or(DeserializeError::MissingActiveSpace(kind))?;
        let raw = json::required_object(envelope, "fields", "", kind)?;
        let locale = space.default_locale().to_string();
        let fields = MappedFields::new(locale.clone(), raw.clone());
        Ok((Some(locale), fields))
    }
}

impl FieldCapability for ListedCapability {
    const SHAPE: FieldShape = FieldShape::Listed;

    type Fields = ListedFields;

    fn install(
        kind: ResourceKind,
        envelope: &Map<String, Value>,
        _ctx: &ResourceContext,
    ) -> DeserializeResult<(Option<String>, ListedFields)> {
        let items = json::required_array(envelope, "fields", "", kind)?;
        Ok((None, ListedFields::new(items.clone())))
    }
}

impl FieldCapability for NoFields {
    const SHAPE: FieldShape = FieldShape::None;

    type Fields = ();

    fn install(
        _kind: ResourceKind,
        _envelope: &Map<String, Value>,
        _ctx: &ResourceContext,
    ) -> DeserializeResult<(Option<String>, ())> {
        Ok((None, ()))
    }
}

/// Installs `sys` and the `C` capability's fields for a resource of `kind`.
pub(crate) fn install_base_fields<C: FieldCapability>(
    kind: ResourceKind,
    envelope: &Map<String, Value>,
    sys: &Map<String, Value>,
    ctx: &ResourceContext,
) -> DeserializeResult<(ResourceBase, C::Fields)> {
    debug_assert_eq!(C::SHAPE, kind.field_shape(), "capability does not match {kind}");

    let sys = Sys::new(sys.clone(), ctx.space().cloned());
    let (locale, fields) = C::install(kind, envelope, ctx)?;
    Ok((ResourceBase::new(sys, locale), fields))
}
