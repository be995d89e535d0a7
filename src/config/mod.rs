//! Configuration for the session host.

mod loader;
mod types;

pub use loader::{ConfigError, ENV_VAR};
pub use types::{BootstrapConfig, Config, StoreConfig};
