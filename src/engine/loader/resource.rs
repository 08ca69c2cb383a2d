use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const CLASSPATH_ALL: &str = "classpath*:";
const CLASSPATH_FIRST: &str = "classpath:";
const FILE: &str = "file:";

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("Invalid resource pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Failed to read resource '{location}': {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// A schema file as handed over by resource discovery. Content is opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaResource {
    location: String,
    content: Vec<u8>,
}

impl SchemaResource {
    pub fn new(location: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            location: location.into(),
            content: content.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// File name without its extension, e.g. `hello` for `a/b/hello.yaml`.
    pub fn schema_id(&self) -> Option<&str> {
        Path::new(&self.location)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
    }
}

/// Turns a location pattern into schema resources.
pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, pattern: &str) -> Result<Vec<SchemaResource>, ResourceError>;
}

/// Scope requested by a pattern's scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    AllRoots,
    FirstMatchingRoot,
}

fn split_scheme(pattern: &str) -> (Scope, &str) {
    if let Some(rest) = pattern.strip_prefix(CLASSPATH_ALL) {
        (Scope::AllRoots, rest)
    } else if let Some(rest) = pattern.strip_prefix(CLASSPATH_FIRST) {
        (Scope::FirstMatchingRoot, rest)
    } else if let Some(rest) = pattern.strip_prefix(FILE) {
        (Scope::AllRoots, rest)
    } else {
        (Scope::AllRoots, pattern)
    }
}

/// Filesystem discovery. Relative patterns are evaluated under every root;
/// `classpath:` stops at the first root with a match.
#[derive(Debug, Clone)]
pub struct GlobResourceResolver {
    roots: Vec<PathBuf>,
}

impl GlobResourceResolver {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    fn glob_files(&self, pattern: &str) -> Result<Vec<PathBuf>, ResourceError> {
        let entries = glob::glob(pattern).map_err(|e| ResourceError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| {
                let location = e.path().to_string_lossy().into_owned();
                ResourceError::Io {
                    location,
                    source: e.into_error(),
                }
            })?;
            if path.is_file() {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

impl ResourceResolver for GlobResourceResolver {
    fn resolve(&self, pattern: &str) -> Result<Vec<SchemaResource>, ResourceError> {
        let (scope, rest) = split_scheme(pattern);

        let mut paths = Vec::new();
        if Path::new(rest).is_absolute() {
            paths.extend(self.glob_files(rest)?);
        } else {
            let relative = rest.trim_start_matches('/');
            for root in &self.roots {
                let full = root.join(relative);
                let found = self.glob_files(&full.to_string_lossy())?;
                debug!(root = %root.display(), matches = found.len(), "Scanned schema root");
                let stop = scope == Scope::FirstMatchingRoot && !found.is_empty();
                paths.extend(found);
                if stop {
                    break;
                }
            }
        }

        paths
            .into_iter()
            .map(|path| {
                let location = path.to_string_lossy().into_owned();
                std::fs::read(&path)
                    .map(|content| SchemaResource::new(location.clone(), content))
                    .map_err(|source| ResourceError::Io { location, source })
            })
            .collect()
    }
}

/// Resolver over resources held in memory; patterns are matched with glob
/// rules against each location.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceResolver {
    resources: Vec<SchemaResource>,
}

impl InMemoryResourceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, location: &str, content: &str) -> Self {
        self.resources
            .push(SchemaResource::new(location, content.as_bytes()));
        self
    }
}

impl ResourceResolver for InMemoryResourceResolver {
    fn resolve(&self, pattern: &str) -> Result<Vec<SchemaResource>, ResourceError> {
        let (_, rest) = split_scheme(pattern);
        let matcher = Pattern::new(rest.trim_start_matches('/')).map_err(|e| {
            ResourceError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };

        Ok(self
            .resources
            .iter()
            .filter(|r| matcher.matches_with(r.location().trim_start_matches('/'), options))
            .cloned()
            .collect())
    }
}
