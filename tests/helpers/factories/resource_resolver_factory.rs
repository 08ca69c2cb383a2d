use crate::engine::loader::InMemoryResourceResolver;
use indoc::indoc;

const SAMPLE_SCHEMA: &str = indoc! {r#"
    swagger: "2.0"
    info:
      title: schema
      version: 1.0.0
    basePath: /test
    paths: {}
"#};

/// In-memory schema resources. Starts with `test/test/schema.yaml`.
pub struct ResourceResolverFactory {
    resolver: InMemoryResourceResolver,
}

impl ResourceResolverFactory {
    pub fn new() -> Self {
        Self {
            resolver: InMemoryResourceResolver::new().with("test/test/schema.yaml", SAMPLE_SCHEMA),
        }
    }

    pub fn empty() -> Self {
        Self {
            resolver: InMemoryResourceResolver::new(),
        }
    }

    pub fn with(mut self, location: &str) -> Self {
        self.resolver = self.resolver.with(location, SAMPLE_SCHEMA);
        self
    }

    pub fn create(self) -> InMemoryResourceResolver {
        self.resolver
    }
}
