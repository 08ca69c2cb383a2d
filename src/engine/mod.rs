pub mod context;
pub mod definition;
pub mod errors;
pub mod loader;

pub use context::RegistrationContext;
pub use errors::*;
