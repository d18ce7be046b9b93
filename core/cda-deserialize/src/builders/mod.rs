//! Per-kind builders. Each takes the envelope, its `sys` object and the
//! context, builds one typed resource, and runs the base-field installer.

mod asset;
mod content_type;
mod entry;
mod generic;
mod space;

pub(crate) use asset::build_asset;
pub(crate) use content_type::build_content_type;
pub(crate) use entry::build_entry;
pub(crate) use generic::build_generic;
pub(crate) use space::build_space;
