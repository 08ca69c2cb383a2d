pub mod listener;
pub mod path_registrar;
pub mod resource;
pub mod schema_loader;

pub use listener::{SchemaListener, SchemaListenerManager};
pub use path_registrar::PathRegistrar;
pub use resource::{
    GlobResourceResolver, InMemoryResourceResolver, ResourceError, ResourceResolver,
    SchemaResource,
};
pub use schema_loader::SchemaLoader;
