//! Deserializer configuration, read from a `[deserializer]` TOML section:
//!
//! ```toml
//! [deserializer]
//! http-scheme = "https"
//! unknown-types = "lenient"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// What to do with a `sys.type` that is not part of the known type list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTypePolicy {
    #[default]
    /// Build a generic resource carrying only `sys`.
    Lenient,
    /// Fail with `DeserializeError::UnknownResourceType`.
    Strict,
}

/// Settings consumed when building a [`ResourceContext`](crate::ResourceContext).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DeserializerConfig {
    /// Scheme prefixed to scheme-relative asset URLs.
    #[serde(default = "default_http_scheme")]
    pub http_scheme: String,
    #[serde(default)]
    pub unknown_types: UnknownTypePolicy,
}

fn default_http_scheme() -> String {
    "https".to_string()
}

impl Default for DeserializerConfig {
    fn default() -> Self {
        Self {
            http_scheme: default_http_scheme(),
            unknown_types: UnknownTypePolicy::default(),
        }
    }
}

/// Raw TOML structure.
#[derive(Deserialize)]
struct ConfigFile {
    #[serde(default)]
    deserializer: DeserializerConfig,
}

impl DeserializerConfig {
    /// Parses a TOML document. A missing `[deserializer]` section yields defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.deserializer)
    }

    /// Reads and parses a config file.
    pub fn try_load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads config from `path`, falling back to defaults when the file is
    /// absent, unreadable, or malformed.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No deserializer config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded deserializer config from {:?}", path);
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load deserializer config {:?}: {}. Falling back to defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }
}
