use crate::engine::definition::SchemaMeta;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Notified after a registration call has stored its schemas.
pub trait SchemaListener: Send + Sync {
    fn on_schemas_loaded(&self, schemas: &[Arc<SchemaMeta>]);
}

#[derive(Default)]
pub struct SchemaListenerManager {
    listeners: RwLock<Vec<Arc<dyn SchemaListener>>>,
}

impl SchemaListenerManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_listener(&self, listener: Arc<dyn SchemaListener>) {
        self.listeners.write().push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }

    /// Listeners run in registration order. Nothing is sent for an empty batch.
    pub fn notify(&self, schemas: &[Arc<SchemaMeta>]) {
        if schemas.is_empty() {
            return;
        }
        let listeners = self.listeners.read().clone();
        for listener in listeners {
            listener.on_schemas_loaded(schemas);
        }
    }
}

impl fmt::Debug for SchemaListenerManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaListenerManager")
            .field("listeners", &self.len())
            .finish()
    }
}
