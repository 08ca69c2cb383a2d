pub use super::factories::{IdentityFactory, RegistrationContextFactory, ResourceResolverFactory};

pub struct Factory;

impl Factory {
    pub fn identity() -> IdentityFactory {
        IdentityFactory::new()
    }

    pub fn resource_resolver() -> ResourceResolverFactory {
        ResourceResolverFactory::new()
    }

    pub fn registration_context() -> RegistrationContextFactory {
        RegistrationContextFactory::new()
    }
}
