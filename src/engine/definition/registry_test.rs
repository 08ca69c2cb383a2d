use crate::engine::definition::{MetadataRegistry, MicroserviceIdentity};
use crate::engine::errors::RegistryError;
use std::sync::{Arc, Barrier};
use std::thread;

fn identity(app: &str, name: &str) -> MicroserviceIdentity {
    MicroserviceIdentity::new(app, name).unwrap()
}

#[test]
fn ensure_microservice_returns_same_instance() {
    let registry = MetadataRegistry::new();
    let id = identity("app", "svc");

    let first = registry.ensure_microservice(&id);
    let second = registry.ensure_microservice(&id);

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[test]
fn ensure_find_before_registration_is_not_found() {
    let registry = MetadataRegistry::new();
    let result = registry.ensure_find_schema_meta(&identity("app", "svc"), "hello");
    assert!(matches!(result, Err(RegistryError::SchemaNotFound { .. })));
    assert!(registry.is_empty(), "lookups must not create entries");
}

#[test]
fn ensure_find_after_registration_is_stable() {
    let registry = MetadataRegistry::new();
    let id = identity("app", "svc");
    registry.put_schema_meta(&id, "hello", "cse.gen.svc.hello").unwrap();

    for _ in 0..3 {
        let meta = registry.ensure_find_schema_meta(&id, "hello").unwrap();
        assert_eq!(meta.namespace(), "cse.gen.svc.hello");
        assert_eq!(meta.identity(), &id);
    }
}

#[test]
fn schemas_are_scoped_by_identity() {
    let registry = MetadataRegistry::new();
    registry
        .put_schema_meta(&identity("app", "svc"), "hello", "ns.a")
        .unwrap();
    registry
        .put_schema_meta(&identity("other", "svc"), "hello", "ns.b")
        .unwrap();

    assert_eq!(
        registry.identities(),
        vec![identity("app", "svc"), identity("other", "svc")]
    );
    assert!(
        registry
            .find_schema_meta(&identity("third", "svc"), "hello")
            .is_none()
    );
}

#[test]
fn conflicting_put_is_rejected() {
    let registry = MetadataRegistry::new();
    let id = identity("app", "svc");
    registry.put_schema_meta(&id, "hello", "ns.a").unwrap();

    let result = registry.put_schema_meta(&id, "hello", "ns.b");
    assert!(matches!(result, Err(RegistryError::SchemaConflict { .. })));
}

#[test]
fn schema_ids_with_separators_are_rejected() {
    let registry = MetadataRegistry::new();
    let id = identity("app", "svc");

    for schema_id in ["schema.v2", "a/b", "", "with space"] {
        let result = registry.put_schema_meta(&id, schema_id, "ns");
        assert!(
            matches!(result, Err(RegistryError::InvalidIdentity(_))),
            "expected rejection for {:?}",
            schema_id
        );
    }
    assert_eq!(
        registry
            .find_microservice(&id)
            .map(|meta| meta.schema_count())
            .unwrap_or(0),
        0
    );
}

#[test]
fn clear_drops_everything() {
    let registry = MetadataRegistry::new();
    registry
        .put_schema_meta(&identity("app", "svc"), "hello", "ns.a")
        .unwrap();
    registry.clear();
    assert!(registry.is_empty());
}

#[test]
fn racing_ensure_microservice_yields_one_instance() {
    let registry = Arc::new(MetadataRegistry::new());
    let barrier = Arc::new(Barrier::new(8));
    let id = identity("app", "svc");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            let id = id.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.ensure_microservice(&id)
            })
        })
        .collect();

    let metas: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(metas.iter().all(|m| Arc::ptr_eq(m, &metas[0])));
    assert_eq!(registry.len(), 1);
}

#[test]
fn racing_puts_of_same_schema_agree() {
    let registry = Arc::new(MetadataRegistry::new());
    let id = identity("app", "svc");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            let id = id.clone();
            thread::spawn(move || {
                registry
                    .put_schema_meta(&id, "shared", "ns.shared")
                    .unwrap();
                registry
                    .put_schema_meta(&id, &format!("own{}", i), "ns.own")
                    .unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let meta = registry.find_microservice(&id).unwrap();
    assert_eq!(meta.schema_count(), 9);
}
