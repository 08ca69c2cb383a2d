use crate::engine::definition::{MetadataRegistry, MicroserviceIdentity};
use crate::engine::errors::RegistryResult;
use crate::shared::path::{compose_base_path, normalize_prefix};
use std::sync::Arc;
use tracing::{debug, info};

/// Records base paths of this application's microservices, merging in the
/// configured global URL prefix exactly once.
#[derive(Debug)]
pub struct PathRegistrar {
    default_app_id: String,
    url_prefix: String,
    registry: Arc<MetadataRegistry>,
}

impl PathRegistrar {
    pub fn new(default_app_id: &str, url_prefix: &str, registry: Arc<MetadataRegistry>) -> Self {
        Self {
            default_app_id: default_app_id.to_string(),
            url_prefix: normalize_prefix(url_prefix),
            registry,
        }
    }

    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// Returns true when a new path entry was added. Empty paths are ignored.
    pub fn put_self_base_path_if_absent(
        &self,
        microservice_name: &str,
        relative_path: &str,
    ) -> RegistryResult<bool> {
        let identity = MicroserviceIdentity::new(&self.default_app_id, microservice_name)?;
        let Some(path) = compose_base_path(&self.url_prefix, relative_path) else {
            debug!(identity = %identity, "Ignoring empty base path");
            return Ok(false);
        };

        let added = self
            .registry
            .ensure_microservice(&identity)
            .add_path_if_absent(&path);
        if added {
            info!(identity = %identity, path = %path, "Registered base path");
        } else {
            debug!(identity = %identity, path = %path, "Base path already registered");
        }
        Ok(added)
    }
}
