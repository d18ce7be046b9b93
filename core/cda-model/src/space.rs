use crate::resource::ResourceBase;
use crate::sys::Sys;
use serde::{Deserialize, Serialize};

/// Locale used when a space flags none of its locales as default.
pub const DEFAULT_LOCALE: &str = "en-US";

/// A locale descriptor as listed on a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Locale {
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "default")]
    pub is_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_code: Option<String>,
}

impl Locale {
    pub fn new(code: impl Into<String>, is_default: bool) -> Self {
        Self {
            code: code.into(),
            name: None,
            is_default,
            fallback_code: None,
        }
    }
}

/// A space: the container every other resource belongs to.
///
/// Supplies the default locale used when installing mapped fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    base: ResourceBase,
    name: String,
    locales: Vec<Locale>,
    default_locale: String,
}

impl Space {
    /// Creates a space. The default locale is the first locale flagged
    /// default, or [`DEFAULT_LOCALE`] if none is.
    pub fn new(base: ResourceBase, name: impl Into<String>, locales: Vec<Locale>) -> Self {
        let default_locale = Self::resolve_default_locale(&locales).to_string();
        Self {
            base,
            name: name.into(),
            locales,
            default_locale,
        }
    }

    /// Code of the first locale flagged default, else [`DEFAULT_LOCALE`].
    pub fn resolve_default_locale(locales: &[Locale]) -> &str {
        locales
            .iter()
            .find(|l| l.is_default)
            .map(|l| l.code.as_str())
            .unwrap_or(DEFAULT_LOCALE)
    }

    pub fn base(&self) -> &ResourceBase {
        &self.base
    }

    pub fn sys(&self) -> &Sys {
        self.base.sys()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Looks up a locale descriptor by code.
    pub fn locale(&self, code: &str) -> Option<&Locale> {
        self.locales.iter().find(|l| l.code == code)
    }
}
