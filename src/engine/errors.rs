use crate::engine::definition::MicroserviceIdentity;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors surfaced by schema registration and lookup.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to resolve schema resources for '{pattern}': {reason}")]
    ResourceResolution { pattern: String, reason: String },

    #[error(
        "Schema '{schema_id}' of {identity} already registered with namespace '{existing}', refusing '{attempted}'"
    )]
    SchemaConflict {
        identity: MicroserviceIdentity,
        schema_id: String,
        existing: String,
        attempted: String,
    },

    #[error("Schema '{schema_id}' not found for {identity}")]
    SchemaNotFound {
        identity: MicroserviceIdentity,
        schema_id: String,
    },

    #[error("Invalid microservice identity: {0}")]
    InvalidIdentity(String),
}

impl RegistryError {
    pub fn log_error(&self) {
        match self {
            RegistryError::ResourceResolution { pattern, reason } => {
                error!(pattern = %pattern, "Schema resource resolution failed: {}", reason);
            }
            RegistryError::SchemaConflict { .. } => {
                error!("{}", self);
                debug!("Schema conflict details: {:?}", self);
            }
            RegistryError::SchemaNotFound { .. } => warn!("{}", self),
            RegistryError::InvalidIdentity(_) => warn!("{}", self),
        }
    }
}

pub type RegistryResult<T> = Result<T, RegistryError>;
