use crate::FieldMap;
use std::any::Any;
use std::fmt;

/// A caller-defined representation for entries of one content type.
///
/// Registered per content-type id and created through a zero-argument
/// factory every time an entry of that content type is built. The generic
/// entry data (sys, fields) stays on [`Entry`](crate::Entry); the custom value
/// rides along and can be recovered with [`Entry::custom`](crate::Entry::custom).
///
/// Most custom types only need `Default + Debug`. Implement
/// [`hydrate`](CustomEntry::hydrate) to pull typed values out of the raw
/// fields once they are installed.
pub trait CustomEntry: Any + fmt::Debug + Send + Sync {
    /// Called after the entry's fields are installed, with the raw field map
    /// for the default locale. An error aborts the whole deserialization.
    fn hydrate(&mut self, fields: &FieldMap) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let _ = fields;
        Ok(())
    }

    /// Name of the concrete type, for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
