use crate::test_helpers::factories::IdentityFactory;

#[test]
fn builds_default_identity() {
    let identity = IdentityFactory::new().create();
    assert_eq!(identity.application_id(), "pojotest");
    assert_eq!(identity.microservice_name(), "perfClient");
}

#[test]
fn overrides_app_and_name() {
    let identity = IdentityFactory::new().with_app("CSE").with_name("as").create();
    assert_eq!(identity.to_string(), "CSE:as");
}
