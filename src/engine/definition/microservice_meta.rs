use crate::engine::definition::identity::MicroserviceIdentity;
use crate::engine::definition::schema_meta::SchemaMeta;
use crate::engine::errors::{RegistryError, RegistryResult};
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// An externally reachable root path of a microservice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasePath {
    pub path: String,
}

/// Per-microservice schemas and base paths.
#[derive(Debug)]
pub struct MicroserviceMeta {
    identity: MicroserviceIdentity,
    schemas: RwLock<BTreeMap<String, Arc<SchemaMeta>>>,
    paths: Mutex<Vec<BasePath>>,
}

impl MicroserviceMeta {
    pub fn new(identity: MicroserviceIdentity) -> Self {
        Self {
            identity,
            schemas: RwLock::new(BTreeMap::new()),
            paths: Mutex::new(Vec::new()),
        }
    }

    pub fn identity(&self) -> &MicroserviceIdentity {
        &self.identity
    }

    pub fn find_schema_meta(&self, schema_id: &str) -> Option<Arc<SchemaMeta>> {
        self.schemas.read().get(schema_id).cloned()
    }

    /// Stores the schema unless present. An existing entry with the same
    /// namespace is returned as is; a different namespace is a conflict.
    pub fn put_schema_meta(&self, schema_id: &str, namespace: &str) -> RegistryResult<Arc<SchemaMeta>> {
        let mut schemas = self.schemas.write();
        if let Some(existing) = schemas.get(schema_id) {
            if existing.namespace() != namespace {
                return Err(RegistryError::SchemaConflict {
                    identity: self.identity.clone(),
                    schema_id: schema_id.to_string(),
                    existing: existing.namespace().to_string(),
                    attempted: namespace.to_string(),
                });
            }
            return Ok(Arc::clone(existing));
        }

        let meta = Arc::new(SchemaMeta::new(self.identity.clone(), schema_id, namespace));
        schemas.insert(schema_id.to_string(), Arc::clone(&meta));
        Ok(meta)
    }

    /// Schemas ordered by schema id.
    pub fn schema_metas(&self) -> Vec<Arc<SchemaMeta>> {
        self.schemas.read().values().cloned().collect()
    }

    pub fn schema_count(&self) -> usize {
        self.schemas.read().len()
    }

    /// Appends `path` unless an equal entry exists. Returns true when added.
    pub fn add_path_if_absent(&self, path: &str) -> bool {
        let mut paths = self.paths.lock();
        if paths.iter().any(|p| p.path == path) {
            return false;
        }
        paths.push(BasePath {
            path: path.to_string(),
        });
        true
    }

    /// Paths in registration order.
    pub fn paths(&self) -> Vec<BasePath> {
        self.paths.lock().clone()
    }

    pub fn clear_paths(&self) {
        self.paths.lock().clear();
    }
}
