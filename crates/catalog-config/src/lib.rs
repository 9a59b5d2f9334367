#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
pub mod logging;
mod loader;
pub mod server;

use serde::Deserialize;

pub use health::HealthConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;

/// Top-level catalog service configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
