use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub service: ServiceConfig,
    #[serde(default)]
    pub rest: RestConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
    pub logging: LoggingConfig,
}

/// Identity of this process.
#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_app_id")]
    pub app_id: String,
    pub name: String,
}

fn default_app_id() -> String {
    "default".to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct RestConfig {
    /// Global prefix merged into every base path. Unset or empty means none.
    pub url_prefix: Option<String>,
    #[serde(default)]
    pub base_paths: Vec<String>,
}

impl RestConfig {
    pub fn url_prefix(&self) -> &str {
        self.url_prefix.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
pub struct SchemaConfig {
    /// Directories searched by relative resource patterns.
    #[serde(default = "default_schema_roots")]
    pub roots: Vec<String>,
    /// Patterns registered for this process at startup.
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            roots: default_schema_roots(),
            patterns: Vec::new(),
        }
    }
}

fn default_schema_roots() -> Vec<String> {
    vec!["resources".to_string()]
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub stdout_level: String,
    pub file_level: String,
}

use std::env;

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("SVC_META_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path))
        .add_source(config::Environment::with_prefix("SVC_META").separator("__"))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
