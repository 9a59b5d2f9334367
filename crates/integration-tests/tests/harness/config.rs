//! Programmatic configuration builder for integration tests

use catalog_config::Config;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with the service defaults
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    #[allow(dead_code)]
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    #[allow(dead_code)]
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
