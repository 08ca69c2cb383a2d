use crate::engine::definition::naming::NAMESPACE_SEPARATOR;
use crate::engine::errors::{RegistryError, RegistryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between application id and microservice name in a specifier.
pub const IDENTITY_SEPARATOR: char = ':';

/// (application id, microservice name) pair naming a microservice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MicroserviceIdentity {
    application_id: String,
    microservice_name: String,
}

impl MicroserviceIdentity {
    pub fn new(application_id: &str, microservice_name: &str) -> RegistryResult<Self> {
        validate_identifier("application id", application_id)?;
        validate_identifier("microservice name", microservice_name)?;
        Ok(Self {
            application_id: application_id.to_string(),
            microservice_name: microservice_name.to_string(),
        })
    }

    /// Parses `name` or `app:name`, splitting on the first separator.
    /// A bare name belongs to `default_app_id`. A second separator is rejected.
    pub fn parse(specifier: &str, default_app_id: &str) -> RegistryResult<Self> {
        let parsed = match specifier.split_once(IDENTITY_SEPARATOR) {
            Some((app, name)) => Self::new(app, name),
            None => Self::new(default_app_id, specifier),
        };
        parsed.map_err(|e| match e {
            RegistryError::InvalidIdentity(reason) => {
                RegistryError::InvalidIdentity(format!("'{}': {}", specifier, reason))
            }
            other => other,
        })
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn microservice_name(&self) -> &str {
        &self.microservice_name
    }

    pub fn is_in_application(&self, application_id: &str) -> bool {
        self.application_id == application_id
    }
}

impl fmt::Display for MicroserviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.application_id, IDENTITY_SEPARATOR, self.microservice_name
        )
    }
}

/// Identifiers must be non-empty and free of control characters, whitespace,
/// the namespace separator and path-hostile characters, so each one maps to
/// exactly one namespace segment.
pub(crate) fn validate_identifier(kind: &str, value: &str) -> RegistryResult<()> {
    if value.is_empty() {
        return Err(RegistryError::InvalidIdentity(format!("{} is empty", kind)));
    }
    if value.chars().any(char::is_control) {
        return Err(RegistryError::InvalidIdentity(format!(
            "{} contains control characters",
            kind
        )));
    }
    if let Some(c) = value.chars().find(|&c| is_reserved(c)) {
        return Err(RegistryError::InvalidIdentity(format!(
            "{} '{}' contains reserved character {:?}",
            kind, value, c
        )));
    }
    Ok(())
}

pub(crate) fn validate_schema_id(schema_id: &str) -> RegistryResult<()> {
    validate_identifier("schema id", schema_id)
}

fn is_reserved(c: char) -> bool {
    c == NAMESPACE_SEPARATOR || matches!(c, '/' | '\\' | IDENTITY_SEPARATOR) || c.is_whitespace()
}
