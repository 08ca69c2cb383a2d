pub mod identity_factory;
pub mod registration_context_factory;
pub mod resource_resolver_factory;

pub use identity_factory::IdentityFactory;
pub use registration_context_factory::RegistrationContextFactory;
pub use resource_resolver_factory::ResourceResolverFactory;

#[cfg(test)]
mod identity_factory_test;
#[cfg(test)]
mod resource_resolver_factory_test;
