pub mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{LoggingConfig, RestConfig, SchemaConfig, ServiceConfig, Settings, load_settings};
