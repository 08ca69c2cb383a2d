use crate::engine::definition::{MetadataRegistry, MicroserviceIdentity, SchemaMeta};
use crate::engine::errors::{RegistryError, RegistryResult};
use crate::engine::loader::{
    GlobResourceResolver, PathRegistrar, ResourceResolver, SchemaListener, SchemaListenerManager,
    SchemaLoader,
};
use crate::shared::config::Settings;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Entry point for schema and base-path registration.
///
/// Built once at startup and handed to whoever needs to register or look up
/// schemas. Every context owns its own registry, so tests can run side by side.
pub struct RegistrationContext {
    registry: Arc<MetadataRegistry>,
    listeners: Arc<SchemaListenerManager>,
    loader: SchemaLoader,
    path_registrar: PathRegistrar,
}

#[derive(Debug, Clone, Serialize)]
pub struct MicroserviceSummary {
    pub identity: String,
    pub schemas: Vec<SchemaSummary>,
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SchemaSummary {
    pub schema_id: String,
    pub namespace: String,
}

impl RegistrationContext {
    pub fn new(
        self_identity: MicroserviceIdentity,
        url_prefix: &str,
        resolver: Arc<dyn ResourceResolver>,
    ) -> Self {
        let registry = Arc::new(MetadataRegistry::new());
        let listeners = Arc::new(SchemaListenerManager::new());
        let path_registrar = PathRegistrar::new(
            self_identity.application_id(),
            url_prefix,
            Arc::clone(&registry),
        );
        let loader = SchemaLoader::new(
            self_identity,
            Arc::clone(&registry),
            resolver,
            Arc::clone(&listeners),
        );
        Self {
            registry,
            listeners,
            loader,
            path_registrar,
        }
    }

    /// Context for this process: identity from `service`, prefix from `rest`,
    /// filesystem discovery over `schema.roots`.
    pub fn from_settings(settings: &Settings) -> RegistryResult<Self> {
        let identity = MicroserviceIdentity::new(&settings.service.app_id, &settings.service.name)?;
        let resolver = Arc::new(GlobResourceResolver::new(&settings.schema.roots));
        info!(
            identity = %identity,
            url_prefix = settings.rest.url_prefix(),
            "Registration context initialized"
        );
        Ok(Self::new(identity, settings.rest.url_prefix(), resolver))
    }

    pub fn registry(&self) -> &Arc<MetadataRegistry> {
        &self.registry
    }

    pub fn self_identity(&self) -> &MicroserviceIdentity {
        self.loader.self_identity()
    }

    pub fn url_prefix(&self) -> &str {
        self.path_registrar.url_prefix()
    }

    pub fn add_listener(&self, listener: Arc<dyn SchemaListener>) {
        self.listeners.add_listener(listener);
    }

    pub fn register_schemas(&self, pattern: &str) -> RegistryResult<Vec<Arc<SchemaMeta>>> {
        self.loader
            .register_schemas(pattern)
            .inspect_err(RegistryError::log_error)
    }

    pub fn register_schemas_for(
        &self,
        specifier: &str,
        pattern: &str,
    ) -> RegistryResult<Vec<Arc<SchemaMeta>>> {
        self.loader
            .register_schemas_for(specifier, pattern)
            .inspect_err(RegistryError::log_error)
    }

    pub fn put_self_base_path_if_absent(
        &self,
        microservice_name: &str,
        relative_path: &str,
    ) -> RegistryResult<bool> {
        self.path_registrar
            .put_self_base_path_if_absent(microservice_name, relative_path)
            .inspect_err(RegistryError::log_error)
    }

    pub fn ensure_find_schema_meta(
        &self,
        application_id: &str,
        microservice_name: &str,
        schema_id: &str,
    ) -> RegistryResult<Arc<SchemaMeta>> {
        let identity = MicroserviceIdentity::new(application_id, microservice_name)?;
        self.registry
            .ensure_find_schema_meta(&identity, schema_id)
            .inspect_err(RegistryError::log_error)
    }

    /// Lookup by `name` or `app:name`.
    pub fn ensure_find_schema_meta_by(
        &self,
        specifier: &str,
        schema_id: &str,
    ) -> RegistryResult<Arc<SchemaMeta>> {
        let identity =
            MicroserviceIdentity::parse(specifier, self.self_identity().application_id())?;
        self.registry
            .ensure_find_schema_meta(&identity, schema_id)
            .inspect_err(RegistryError::log_error)
    }

    /// Microservices with their schemas and paths, ordered by identity.
    pub fn summary(&self) -> Vec<MicroserviceSummary> {
        self.registry
            .identities()
            .into_iter()
            .filter_map(|identity| self.registry.find_microservice(&identity))
            .map(|meta| MicroserviceSummary {
                identity: meta.identity().to_string(),
                schemas: meta
                    .schema_metas()
                    .iter()
                    .map(|s| SchemaSummary {
                        schema_id: s.schema_id().to_string(),
                        namespace: s.namespace().to_string(),
                    })
                    .collect(),
                paths: meta.paths().into_iter().map(|p| p.path).collect(),
            })
            .collect()
    }

    /// Drops all registered microservices. Listeners stay attached.
    pub fn reset(&self) {
        self.registry.clear();
    }
}
