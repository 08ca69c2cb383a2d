use crate::engine::context::RegistrationContext;
use crate::test_helpers::factories::{IdentityFactory, ResourceResolverFactory};
use std::sync::Arc;

/// Context for `pojotest:perfClient` over in-memory resources.
pub struct RegistrationContextFactory {
    identity: IdentityFactory,
    resources: ResourceResolverFactory,
    url_prefix: String,
}

impl RegistrationContextFactory {
    pub fn new() -> Self {
        Self {
            identity: IdentityFactory::new(),
            resources: ResourceResolverFactory::new(),
            url_prefix: String::new(),
        }
    }

    pub fn with_url_prefix(mut self, prefix: &str) -> Self {
        self.url_prefix = prefix.to_string();
        self
    }

    pub fn with_resources(mut self, resources: ResourceResolverFactory) -> Self {
        self.resources = resources;
        self
    }

    pub fn create(self) -> RegistrationContext {
        RegistrationContext::new(
            self.identity.create(),
            &self.url_prefix,
            Arc::new(self.resources.create()),
        )
    }
}
