use crate::engine::loader::ResourceResolver;
use crate::test_helpers::factories::ResourceResolverFactory;

#[test]
fn default_resolver_holds_sample_schema() {
    let resolver = ResourceResolverFactory::new().create();
    let found = resolver.resolve("test/test/*.yaml").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].schema_id(), Some("schema"));
    assert!(!found[0].content().is_empty());
}

#[test]
fn empty_resolver_matches_nothing() {
    let resolver = ResourceResolverFactory::empty().with("x/hello.yaml").create();
    assert!(resolver.resolve("test/test/*.yaml").unwrap().is_empty());
    assert_eq!(resolver.resolve("x/*.yaml").unwrap().len(), 1);
}
