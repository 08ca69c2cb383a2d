pub mod identity;
pub mod microservice_meta;
pub mod naming;
pub mod registry;
pub mod schema_meta;

pub use identity::{IDENTITY_SEPARATOR, MicroserviceIdentity};
pub use microservice_meta::{BasePath, MicroserviceMeta};
pub use naming::{NAMESPACE_ROOT, NAMESPACE_SEPARATOR, build_namespace};
pub use registry::MetadataRegistry;
pub use schema_meta::SchemaMeta;

#[cfg(test)]
mod registry_test;
