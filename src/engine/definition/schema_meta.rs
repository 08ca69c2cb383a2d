use crate::engine::definition::identity::MicroserviceIdentity;
use serde::Serialize;

/// A registered schema and the namespace derived for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaMeta {
    schema_id: String,
    namespace: String,
    identity: MicroserviceIdentity,
}

impl SchemaMeta {
    pub(crate) fn new(identity: MicroserviceIdentity, schema_id: &str, namespace: &str) -> Self {
        Self {
            schema_id: schema_id.to_string(),
            namespace: namespace.to_string(),
            identity,
        }
    }

    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn identity(&self) -> &MicroserviceIdentity {
        &self.identity
    }
}
