//! Read-only inputs of a deserialization pass.

use crate::config::{DeserializerConfig, UnknownTypePolicy};
use crate::registry::CustomTypeRegistry;
use cda_model::Space;
use std::sync::Arc;

/// Everything the builders read besides the envelope itself: the transport
/// scheme, the active space, the custom entry registry, and the policy for
/// unknown resource types.
///
/// Cheap to clone; the space and registry are shared.
#[derive(Debug, Clone)]
pub struct ResourceContext {
    http_scheme: String,
    space: Option<Arc<Space>>,
    registry: Arc<CustomTypeRegistry>,
    unknown_types: UnknownTypePolicy,
}

impl ResourceContext {
    pub fn builder() -> ResourceContextBuilder {
        ResourceContextBuilder::default()
    }

    pub fn from_config(
        config: &DeserializerConfig,
        space: Option<Arc<Space>>,
        registry: Arc<CustomTypeRegistry>,
    ) -> Self {
        Self {
            http_scheme: config.http_scheme.clone(),
            space,
            registry,
            unknown_types: config.unknown_types,
        }
    }

    /// Returns a copy of this context with `space` as the active space.
    pub fn with_space(&self, space: Arc<Space>) -> Self {
        Self {
            space: Some(space),
            ..self.clone()
        }
    }

    pub fn http_scheme(&self) -> &str {
        &self.http_scheme
    }

    pub fn space(&self) -> Option<&Arc<Space>> {
        self.space.as_ref()
    }

    pub fn registry(&self) -> &CustomTypeRegistry {
        &self.registry
    }

    pub fn unknown_types(&self) -> UnknownTypePolicy {
        self.unknown_types
    }
}

impl Default for ResourceContext {
    fn default() -> Self {
        ResourceContextBuilder::default().build()
    }
}

/// Builder for [`ResourceContext`].
#[derive(Debug, Default)]
pub struct ResourceContextBuilder {
    config: DeserializerConfig,
    space: Option<Arc<Space>>,
    registry: Option<Arc<CustomTypeRegistry>>,
}

impl ResourceContextBuilder {
    /// Starts from `config` instead of the defaults.
    pub fn config(mut self, config: DeserializerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn http_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.config.http_scheme = scheme.into();
        self
    }

    pub fn unknown_types(mut self, policy: UnknownTypePolicy) -> Self {
        self.config.unknown_types = policy;
        self
    }

    pub fn space(mut self, space: Arc<Space>) -> Self {
        self.space = Some(space);
        self
    }

    pub fn registry(mut self, registry: Arc<CustomTypeRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> ResourceContext {
        ResourceContext::from_config(
            &self.config,
            self.space,
            self.registry.unwrap_or_default(),
        )
    }
}
