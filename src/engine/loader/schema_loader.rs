use crate::engine::definition::{MetadataRegistry, MicroserviceIdentity, SchemaMeta, build_namespace};
use crate::engine::errors::{RegistryError, RegistryResult};
use crate::engine::loader::listener::SchemaListenerManager;
use crate::engine::loader::resource::ResourceResolver;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Binds discovered schema resources to a microservice and records them in the
/// registry.
pub struct SchemaLoader {
    self_identity: MicroserviceIdentity,
    registry: Arc<MetadataRegistry>,
    resolver: Arc<dyn ResourceResolver>,
    listeners: Arc<SchemaListenerManager>,
}

impl SchemaLoader {
    pub fn new(
        self_identity: MicroserviceIdentity,
        registry: Arc<MetadataRegistry>,
        resolver: Arc<dyn ResourceResolver>,
        listeners: Arc<SchemaListenerManager>,
    ) -> Self {
        Self {
            self_identity,
            registry,
            resolver,
            listeners,
        }
    }

    pub fn self_identity(&self) -> &MicroserviceIdentity {
        &self.self_identity
    }

    pub fn default_app_id(&self) -> &str {
        self.self_identity.application_id()
    }

    /// Registers everything `pattern` matches under this process's identity.
    pub fn register_schemas(&self, pattern: &str) -> RegistryResult<Vec<Arc<SchemaMeta>>> {
        let identity = self.self_identity.clone();
        self.register_schemas_to(&identity, pattern)
    }

    /// Registers under `name` or `app:name`; a bare name belongs to this
    /// process's application.
    pub fn register_schemas_for(
        &self,
        specifier: &str,
        pattern: &str,
    ) -> RegistryResult<Vec<Arc<SchemaMeta>>> {
        let identity = MicroserviceIdentity::parse(specifier, self.default_app_id())?;
        self.register_schemas_to(&identity, pattern)
    }

    /// Schemas stored before a failure stay registered.
    pub fn register_schemas_to(
        &self,
        identity: &MicroserviceIdentity,
        pattern: &str,
    ) -> RegistryResult<Vec<Arc<SchemaMeta>>> {
        let resources =
            self.resolver
                .resolve(pattern)
                .map_err(|e| RegistryError::ResourceResolution {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })?;

        if resources.is_empty() {
            return Err(RegistryError::ResourceResolution {
                pattern: pattern.to_string(),
                reason: "no resources matched".to_string(),
            });
        }

        let mut seen = HashSet::new();
        let mut registered = Vec::with_capacity(resources.len());
        for resource in &resources {
            let schema_id =
                resource
                    .schema_id()
                    .ok_or_else(|| RegistryError::ResourceResolution {
                        pattern: pattern.to_string(),
                        reason: format!("cannot derive schema id from '{}'", resource.location()),
                    })?;

            if !seen.insert(schema_id.to_string()) {
                warn!(
                    identity = %identity,
                    schema_id,
                    location = resource.location(),
                    "Duplicate schema id in one registration, keeping the first"
                );
                continue;
            }

            let namespace = build_namespace(self.default_app_id(), identity, schema_id);
            let meta = self.registry.put_schema_meta(identity, schema_id, &namespace)?;
            debug!(
                identity = %identity,
                schema_id,
                namespace = meta.namespace(),
                location = resource.location(),
                "Registered schema"
            );
            registered.push(meta);
        }

        info!(
            identity = %identity,
            pattern,
            count = registered.len(),
            "Schemas registered"
        );
        self.listeners.notify(&registered);
        Ok(registered)
    }
}
