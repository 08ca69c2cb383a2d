use crate::engine::definition::identity::{MicroserviceIdentity, validate_schema_id};
use crate::engine::definition::microservice_meta::MicroserviceMeta;
use crate::engine::definition::schema_meta::SchemaMeta;
use crate::engine::errors::{RegistryError, RegistryResult};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// In-memory index of microservices and their schemas.
///
/// Entries are created lazily and live until [`MetadataRegistry::clear`].
/// Creation goes through the map's entry API, so racing callers always share
/// one [`MicroserviceMeta`] per identity.
#[derive(Debug, Default)]
pub struct MetadataRegistry {
    microservices: DashMap<MicroserviceIdentity, Arc<MicroserviceMeta>>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_microservice(&self, identity: &MicroserviceIdentity) -> Arc<MicroserviceMeta> {
        if let Some(existing) = self.microservices.get(identity) {
            return Arc::clone(existing.value());
        }
        let entry = self
            .microservices
            .entry(identity.clone())
            .or_insert_with(|| {
                debug!(identity = %identity, "Creating microservice metadata");
                Arc::new(MicroserviceMeta::new(identity.clone()))
            });
        Arc::clone(entry.value())
    }

    pub fn find_microservice(&self, identity: &MicroserviceIdentity) -> Option<Arc<MicroserviceMeta>> {
        self.microservices
            .get(identity)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn put_schema_meta(
        &self,
        identity: &MicroserviceIdentity,
        schema_id: &str,
        namespace: &str,
    ) -> RegistryResult<Arc<SchemaMeta>> {
        validate_schema_id(schema_id)?;
        self.ensure_microservice(identity)
            .put_schema_meta(schema_id, namespace)
    }

    pub fn find_schema_meta(
        &self,
        identity: &MicroserviceIdentity,
        schema_id: &str,
    ) -> Option<Arc<SchemaMeta>> {
        self.find_microservice(identity)
            .and_then(|meta| meta.find_schema_meta(schema_id))
    }

    pub fn ensure_find_schema_meta(
        &self,
        identity: &MicroserviceIdentity,
        schema_id: &str,
    ) -> RegistryResult<Arc<SchemaMeta>> {
        self.find_schema_meta(identity, schema_id)
            .ok_or_else(|| RegistryError::SchemaNotFound {
                identity: identity.clone(),
                schema_id: schema_id.to_string(),
            })
    }

    /// Snapshot of registered identities, sorted.
    pub fn identities(&self) -> Vec<MicroserviceIdentity> {
        let mut ids: Vec<_> = self
            .microservices
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.microservices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.microservices.is_empty()
    }

    pub fn clear(&self) {
        self.microservices.clear();
    }
}
