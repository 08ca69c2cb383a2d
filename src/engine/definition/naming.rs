use crate::engine::definition::identity::MicroserviceIdentity;

/// Root token of every generated namespace.
pub const NAMESPACE_ROOT: &str = "cse.gen";

pub const NAMESPACE_SEPARATOR: char = '.';

/// Derives the generated-code namespace of a schema.
///
/// Layout is `cse.gen[.<app>].<microservice>.<schema>`. The application segment
/// is omitted when the identity belongs to `default_app_id`, so namespaces of
/// the process's own application stay stable across deployments.
///
/// Identities and schema ids never contain the separator, so the segment
/// count tells both layouts apart and distinct inputs give distinct results.
pub fn build_namespace(
    default_app_id: &str,
    identity: &MicroserviceIdentity,
    schema_id: &str,
) -> String {
    let mut namespace = String::from(NAMESPACE_ROOT);
    if !identity.is_in_application(default_app_id) {
        push_segment(&mut namespace, identity.application_id());
    }
    push_segment(&mut namespace, identity.microservice_name());
    push_segment(&mut namespace, schema_id);
    namespace
}

fn push_segment(namespace: &mut String, segment: &str) {
    namespace.push(NAMESPACE_SEPARATOR);
    namespace.push_str(segment);
}
